pub mod stock;

pub use stock::Stock;
