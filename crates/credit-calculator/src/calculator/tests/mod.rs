mod common;
mod finalizer;
mod routing;
