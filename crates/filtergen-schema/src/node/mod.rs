mod entity;
mod property;

pub use entity::EntityDescriptor;
pub use property::{PropertyDescriptor, PropertyKind};
