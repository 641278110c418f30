mod common;

mod catalog;
mod routing;
