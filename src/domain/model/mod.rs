mod bloc;
mod chambre;
mod course;
mod etudiant;
mod foyer;
mod reservation;
mod universite;

pub use bloc::Bloc;
pub use chambre::{Chambre, ChambreType};
pub use course::Course;
pub use etudiant::Etudiant;
pub use foyer::Foyer;
pub use reservation::Reservation;
pub use universite::Universite;

use std::fmt::{Debug, Display};

/// A persisted record whose identifier is assigned by the store.
///
/// `id()` is `None` until the entity has been saved once.
pub trait Entity: Clone + Debug + Send + Sync {
    type Id: Clone + Debug + Display + PartialEq + Send + Sync;

    /// Human readable entity name used in error messages and logs.
    const KIND: &'static str;

    fn id(&self) -> Option<&Self::Id>;
    fn set_id(&mut self, id: Self::Id);
}
