pub mod city;
pub mod country;
pub mod item;
pub mod location;
pub mod user;

pub use city::*;
pub use country::*;
pub use item::*;
pub use location::*;
pub use user::*;
