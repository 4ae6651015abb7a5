mod hello;

pub use hello::{hello, Greeting, GREETING};
