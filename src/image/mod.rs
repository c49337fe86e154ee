pub mod gray;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::gray::GrayU8;
pub use self::traits::{ImageView, ImageViewMut};
pub use self::u8::ImageU8;
