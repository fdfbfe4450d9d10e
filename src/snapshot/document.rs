//! Serde-Abbild des Snapshot-Dokuments und Konvertierung in die Core-Typen.

use super::EditorDocument;
use crate::core::{
    BackgroundImage, BackgroundLayers, Polygon, PolygonStore, PolygonVertex, Road, RoadKind,
    RoadMap, RoadNode, ViewTransform,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Punkt als `{x, y}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDto {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for PointDto {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<PointDto> for Vec2 {
    fn from(p: PointDto) -> Self {
        Vec2::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDto {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub connected_road_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadDto {
    pub id: u64,
    pub start: PointDto,
    pub end: PointDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_node_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_node_id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: RoadKind,
    pub width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_points: Option<[PointDto; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexDto {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub cp1: PointDto,
    pub cp2: PointDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonDto {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub points: Vec<VertexDto>,
    pub fill_color: String,
    pub stroke_color: String,
    pub opacity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundDto {
    pub id: u64,
    pub src: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub width: f32,
    pub height: f32,
    pub opacity: f32,
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub name: String,
}

/// Wurzel des JSON-Dokuments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDto {
    #[serde(default)]
    pub nodes: Vec<NodeDto>,
    #[serde(default)]
    pub roads: Vec<RoadDto>,
    #[serde(default)]
    pub polygons: Vec<PolygonDto>,
    #[serde(default)]
    pub background_images: Vec<BackgroundDto>,
    pub pan_offset: PointDto,
    pub zoom: f32,
}

impl From<&RoadNode> for NodeDto {
    fn from(node: &RoadNode) -> Self {
        Self {
            id: node.id,
            x: node.position.x,
            y: node.position.y,
            connected_road_ids: node.connected_road_ids.clone(),
        }
    }
}

impl From<NodeDto> for RoadNode {
    fn from(dto: NodeDto) -> Self {
        Self {
            id: dto.id,
            position: Vec2::new(dto.x, dto.y),
            connected_road_ids: dto.connected_road_ids,
        }
    }
}

impl From<&Road> for RoadDto {
    fn from(road: &Road) -> Self {
        Self {
            id: road.id,
            start: road.start.into(),
            end: road.end.into(),
            start_node_id: road.start_node_id,
            end_node_id: road.end_node_id,
            kind: road.kind,
            width: road.width,
            name: road.name.clone(),
            control_points: road.control_points.map(|cps| cps.map(PointDto::from)),
        }
    }
}

impl From<RoadDto> for Road {
    fn from(dto: RoadDto) -> Self {
        Self {
            id: dto.id,
            start: dto.start.into(),
            end: dto.end.into(),
            start_node_id: dto.start_node_id,
            end_node_id: dto.end_node_id,
            kind: dto.kind,
            width: dto.width,
            name: dto.name,
            control_points: dto.control_points.map(|cps| cps.map(Vec2::from)),
        }
    }
}

impl From<&Polygon> for PolygonDto {
    fn from(polygon: &Polygon) -> Self {
        Self {
            id: polygon.id,
            name: polygon.name.clone(),
            points: polygon
                .points
                .iter()
                .map(|v| VertexDto {
                    id: v.id,
                    x: v.position.x,
                    y: v.position.y,
                    cp1: v.cp1.into(),
                    cp2: v.cp2.into(),
                })
                .collect(),
            fill_color: polygon.fill_color.clone(),
            stroke_color: polygon.stroke_color.clone(),
            opacity: polygon.opacity,
            area: polygon.area,
        }
    }
}

impl From<PolygonDto> for Polygon {
    fn from(dto: PolygonDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            points: dto
                .points
                .into_iter()
                .map(|v| PolygonVertex {
                    id: v.id,
                    position: Vec2::new(v.x, v.y),
                    cp1: v.cp1.into(),
                    cp2: v.cp2.into(),
                })
                .collect(),
            fill_color: dto.fill_color,
            stroke_color: dto.stroke_color,
            opacity: dto.opacity,
            area: dto.area,
        }
    }
}

impl From<&BackgroundImage> for BackgroundDto {
    fn from(image: &BackgroundImage) -> Self {
        Self {
            id: image.id,
            src: image.src.clone(),
            x: image.position.x,
            y: image.position.y,
            scale: image.scale,
            width: image.width,
            height: image.height,
            opacity: image.opacity,
            visible: image.visible,
            locked: image.locked,
            rotation: image.rotation,
            name: image.name.clone(),
        }
    }
}

impl From<BackgroundDto> for BackgroundImage {
    fn from(dto: BackgroundDto) -> Self {
        Self {
            id: dto.id,
            src: dto.src,
            position: Vec2::new(dto.x, dto.y),
            scale: dto.scale,
            width: dto.width,
            height: dto.height,
            opacity: dto.opacity,
            visible: dto.visible,
            locked: dto.locked,
            rotation: dto.rotation,
            name: dto.name,
        }
    }
}

impl From<&EditorDocument> for SnapshotDto {
    fn from(doc: &EditorDocument) -> Self {
        // Nodes liegen in einer HashMap: nach ID sortieren für stabile Ausgabe
        let mut nodes: Vec<NodeDto> = doc.road_map.nodes_iter().map(NodeDto::from).collect();
        nodes.sort_unstable_by_key(|n| n.id);

        Self {
            nodes,
            roads: doc.road_map.roads_iter().map(RoadDto::from).collect(),
            polygons: doc.polygons.iter().map(PolygonDto::from).collect(),
            background_images: doc.backgrounds.iter().map(BackgroundDto::from).collect(),
            pan_offset: doc.view.pan_offset.into(),
            zoom: doc.view.zoom,
        }
    }
}

impl From<SnapshotDto> for EditorDocument {
    fn from(dto: SnapshotDto) -> Self {
        let road_map = RoadMap::from_parts(
            dto.nodes.into_iter().map(RoadNode::from),
            dto.roads.into_iter().map(Road::from),
        );

        let mut polygons = PolygonStore::new();
        for polygon in dto.polygons {
            polygons.insert(polygon.into());
        }

        let mut backgrounds = BackgroundLayers::new();
        for image in dto.background_images {
            backgrounds.insert(image.into());
        }

        Self {
            road_map,
            polygons,
            backgrounds,
            view: ViewTransform::from_parts(dto.pan_offset.into(), dto.zoom),
        }
    }
}
