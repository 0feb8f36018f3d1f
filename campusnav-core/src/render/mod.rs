//! Rendering of the building graph and computed routes
//!
//! A [`FloorView`] picks the nodes of one floor (or all of them) and the part
//! of a route lying there; the view is then drawn as SVG. Routes can also be
//! exported as `GeoJSON` in layout coordinates.

mod svg;
mod to_geojson;
mod view;

pub use svg::{RenderStyle, render_svg};
pub use to_geojson::route_to_geojson;
pub use view::{FloorSelection, FloorView, NodeRole};
