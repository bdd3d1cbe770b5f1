mod album;
mod guard;
mod nav;
mod page;
mod surface;
mod types;

pub use album::Album;
pub use guard::{FlightPermit, SingleFlight};
pub use nav::Navigator;
pub use page::{Page, PageId};
pub use surface::PageSurface;
pub use types::*;
