pub mod oneshot;
