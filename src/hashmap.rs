#[cfg(feature = "ahash")]
pub use ahash::AHashMap as HashMap;
#[cfg(not(feature = "ahash"))]
pub use std::collections::HashMap;
