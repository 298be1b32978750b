pub mod about;
pub mod calculator;
pub mod rates;

pub use about::AboutPage;
pub use calculator::CalculatorPage;
pub use rates::RatesPage;
