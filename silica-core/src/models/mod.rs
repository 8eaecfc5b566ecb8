pub mod alphabet;
pub mod budget;
pub mod primer;

// re-export for cleaner imports
pub use self::alphabet::Alphabet;
pub use self::budget::ErrorBudget;
pub use self::primer::{PcrProduct, PrimerBind, Strand};
