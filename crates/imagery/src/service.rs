//! ArcGIS export endpoint: service catalog and request URL construction.
//!
//! The basemap is fetched with a single `export` request against the public
//! ArcGIS Online REST API: one GET returns an image covering the requested
//! EPSG:3857 bounding box at the requested pixel size.

use std::fmt;
use std::str::FromStr;

use shoremap_core::MapProjection;

const ARCGIS_HOST: &str = "https://server.arcgisonline.com/ArcGIS/rest/services";

/// Basemap services available on ArcGIS Online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageryService {
    /// World satellite/aerial imagery (the default).
    #[default]
    WorldImagery,
    /// Shaded-relief topographic basemap.
    WorldTopoMap,
    /// Street map basemap.
    WorldStreetMap,
}

impl ImageryService {
    /// Service path segment in the REST URL.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WorldImagery => "World_Imagery",
            Self::WorldTopoMap => "World_Topo_Map",
            Self::WorldStreetMap => "World_Street_Map",
        }
    }
}

impl fmt::Display for ImageryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageryService {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "world_imagery" | "imagery" | "satellite" => Ok(Self::WorldImagery),
            "world_topo_map" | "topo" => Ok(Self::WorldTopoMap),
            "world_street_map" | "street" => Ok(Self::WorldStreetMap),
            _ => Err(format!(
                "unknown imagery service: {s}. Use satellite, topo, or street."
            )),
        }
    }
}

/// Build the export URL for the projection's extent and canvas size.
pub fn export_url(service: ImageryService, proj: &MapProjection) -> String {
    let (min_x, min_y, max_x, max_y) = proj.mercator_extent();
    format!(
        "{host}/{svc}/MapServer/export?bbox={min_x},{min_y},{max_x},{max_y}\
         &bboxSR=3857&imageSR=3857&size={w},{h}&format=png&transparent=false&f=image",
        host = ARCGIS_HOST,
        svc = service.name(),
        w = proj.width(),
        h = proj.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoremap_core::BoundingBox;

    #[test]
    fn export_url_contains_service_size_and_srs() {
        let bbox = BoundingBox::new(51.6, -8.6, 51.75, -8.4);
        let proj = MapProjection::new(bbox, 1500).unwrap();
        let url = export_url(ImageryService::WorldImagery, &proj);
        assert!(url.starts_with("https://server.arcgisonline.com/"));
        assert!(url.contains("/World_Imagery/MapServer/export?"));
        assert!(url.contains("bboxSR=3857"));
        assert!(url.contains(&format!("size=1500,{}", proj.height())));
        assert!(url.contains("f=image"));
    }

    #[test]
    fn service_parses_from_aliases() {
        assert_eq!(
            "satellite".parse::<ImageryService>().unwrap(),
            ImageryService::WorldImagery
        );
        assert_eq!(
            "World_Topo_Map".parse::<ImageryService>().unwrap(),
            ImageryService::WorldTopoMap
        );
        assert!("nonsense".parse::<ImageryService>().is_err());
    }
}
