pub mod destination_repo;

pub use destination_repo::DestinationRepository;
