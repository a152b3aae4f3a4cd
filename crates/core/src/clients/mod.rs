pub mod payu;

pub use payu::PayuClient;
