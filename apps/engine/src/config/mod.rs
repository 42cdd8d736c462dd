pub mod round;

pub use round::RoundConfig;
