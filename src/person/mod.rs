//! The person entity and the default payload scraper.

mod model;
mod scrape;
mod wire;

pub use model::{Person, PersonEmail, PersonName, PersonPhoto, SourceId};
pub use scrape::{PayloadScraper, scrape_payload};
