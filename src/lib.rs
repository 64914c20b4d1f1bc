//! Layout and scaling for two-image frames.
//!
//! Pure geometry: no pixel operations, `no_std` compatible. The host decodes
//! images and draws; this crate decides where everything goes.
//!
//! # Modules
//!
//! - [`aspect`] — Supported frame aspect ratios
//! - [`orientation`] — Portrait / landscape and the stacking axis
//! - [`frame`] — Frame dimensions from longest side, ratio, orientation
//! - [`layout`] — Border models and the two image slots
//! - [`fit`] — Fit / fill scaling and centering inside a slot
//! - [`preview`] — Preview scale and export pixel ratio
//! - [`config`] — Frame configuration record with defaults
//! - [`scene`] — Stage, background, and placements for a renderer
//! - `export` — Export through a host render surface (`alloc`)
//!
//! # Example
//!
//! ```
//! use diptych::{AspectRatio, Orientation, Scene, FrameConfig, SourceImage};
//!
//! let config = FrameConfig::default()
//!     .aspect_ratio(AspectRatio::ThreeTwo)
//!     .orientation(Orientation::Portrait)
//!     .frame_size(2048.0);
//!
//! let frame = config.dimensions();
//! assert_eq!(frame.height, 2048.0);
//!
//! let photo = SourceImage::new(6000.0, 4000.0);
//! let scene = Scene::new(&config, Some(512.0), [Some(photo), Some(photo)]);
//! assert!(scene.can_export());
//!
//! // Rendering the 512px stage at this ratio yields the full-size frame.
//! let out = scene.stage().width * scene.export_pixel_ratio();
//! assert!((out - frame.width).abs() < 1e-9);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod aspect;
pub mod color;
pub mod config;
mod error;
#[cfg(feature = "alloc")]
pub mod export;
pub mod fit;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod orientation;
pub mod preview;
pub mod scene;

pub use aspect::AspectRatio;
pub use color::{BackgroundColor, ColorMode};
pub use config::{BorderSetting, FrameConfig};
pub use error::LayoutError;
pub use fit::{
    FittedPlacement, ScaleMode, SourceImage, center_offset, fit_within_slot, fit_within_slot_str,
    place,
};
pub use frame::{FrameDimensions, FrameGeometryMemo, compute_frame_dimensions, frame_dimensions};
pub use geometry::{Rect, Size};
pub use layout::{BorderModel, Slot, Slots, compute_slots};
pub use orientation::Orientation;
pub use preview::{PreviewProjector, export_pixel_ratio, preview_scale, project_to_preview};
pub use scene::{Background, Scene};
