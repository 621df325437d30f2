pub mod hit;
pub mod strand;

// re-export for cleaner imports
pub use self::hit::HitRecord;
pub use self::strand::Strand;
