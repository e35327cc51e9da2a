//! S3 counter plug: a static landing page with a click counter.

mod app;
pub mod config;
pub mod counter;

pub use app::{App, Landing, LandingProps};
pub use config::{ConfigError, LogoLink, SiteConfig};
pub use counter::{Counter, CounterAction};
