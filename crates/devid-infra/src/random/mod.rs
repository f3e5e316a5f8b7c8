mod uuid_generator;

pub use uuid_generator::UuidV4Generator;
