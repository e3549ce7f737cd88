mod resolver;

pub use self::resolver::CollisionResolver;
