//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Zeigereingaben werden hier von Bildschirm- in Weltkoordinaten umgerechnet
//! und je nach aktivem Werkzeug an die passenden Commands verteilt.

use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let tool = state.editor.active_tool;
    match intent {
        AppIntent::PointerPressed { screen_pos } => {
            let world_pos = state.view.screen_to_world(screen_pos);
            match tool {
                EditorTool::Select => vec![AppCommand::PointerDown {
                    world_pos,
                    pick_radius: state.view.px_to_world(state.options.pick_radius_px),
                    handle_radius: state.view.px_to_world(state.options.handle_pick_radius_px),
                    hit_tolerance: state.view.px_to_world(state.options.hit_tolerance_px),
                }],
                EditorTool::Build => vec![AppCommand::BuildClick { world_pos }],
                EditorTool::Polygon => vec![AppCommand::PolygonClick {
                    world_pos,
                    close_radius: state
                        .view
                        .px_to_world(state.options.polygon_close_radius_px),
                }],
                EditorTool::AddNode => vec![AppCommand::AddNodeAtPosition { world_pos }],
                EditorTool::Pan => vec![AppCommand::BeginPan { screen_pos }],
            }
        }
        AppIntent::PointerMoved { screen_pos } => {
            let world_pos = state.view.screen_to_world(screen_pos);
            let mut commands = vec![AppCommand::UpdateCursor { world_pos }];
            match tool {
                EditorTool::Select if state.selection.drag.is_some() => {
                    commands.push(AppCommand::DragTo { world_pos });
                }
                EditorTool::Build => commands.push(AppCommand::BuildHover { world_pos }),
                EditorTool::Polygon => commands.push(AppCommand::PolygonHover { world_pos }),
                EditorTool::Pan if state.editor.pan_anchor.is_some() => {
                    commands.push(AppCommand::PanDrag { screen_pos });
                }
                _ => {}
            }
            commands
        }
        AppIntent::PointerReleased { .. } => match tool {
            EditorTool::Select if state.selection.drag.is_some() => vec![AppCommand::EndDrag],
            EditorTool::Pan if state.editor.pan_anchor.is_some() => vec![AppCommand::EndPan],
            _ => vec![],
        },
        AppIntent::ConfirmRequested => match tool {
            EditorTool::Build => vec![AppCommand::BuildComplete],
            EditorTool::Polygon => vec![AppCommand::PolygonClose],
            _ => vec![],
        },
        AppIntent::CancelRequested => match tool {
            EditorTool::Build => vec![AppCommand::BuildCancel],
            EditorTool::Polygon => vec![AppCommand::PolygonCancel],
            _ => vec![AppCommand::ClearSelection],
        },
        AppIntent::UndoLastPointRequested => match tool {
            EditorTool::Build => vec![AppCommand::BuildRemoveLast],
            EditorTool::Polygon => vec![AppCommand::PolygonRemoveLast],
            _ => vec![],
        },
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],

        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ScrollZoom {
            factor,
            screen_focus,
        } => vec![AppCommand::ZoomCamera {
            factor,
            screen_focus,
        }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],

        AppIntent::SetSnapDistance { distance } => vec![AppCommand::SetSnapDistance { distance }],
        AppIntent::SetGridSnap { enabled } => vec![AppCommand::SetGridSnap { enabled }],
        AppIntent::SetDefaultRoadWidth { width } => {
            vec![AppCommand::SetDefaultRoadWidth { width }]
        }
        AppIntent::SetDefaultRoadType { kind } => vec![AppCommand::SetDefaultRoadType { kind }],
        AppIntent::SetCurveMode { enabled } => vec![AppCommand::SetCurveMode { enabled }],
        AppIntent::SetMetersPerPixel { meters_per_pixel } => {
            vec![AppCommand::SetMetersPerPixel { meters_per_pixel }]
        }
        AppIntent::SetDefaultPolygonStyle { style } => {
            vec![AppCommand::SetDefaultPolygonStyle { style }]
        }

        AppIntent::SetRoadWidthRequested { road_id, width } => {
            vec![AppCommand::SetRoadWidth { road_id, width }]
        }
        AppIntent::SetRoadNameRequested { road_id, name } => {
            vec![AppCommand::SetRoadName { road_id, name }]
        }
        AppIntent::SetRoadTypeRequested { road_id, kind } => {
            vec![AppCommand::SetRoadType { road_id, kind }]
        }
        AppIntent::SetPolygonFillColorRequested { polygon_id, color } => {
            vec![AppCommand::SetPolygonFillColor { polygon_id, color }]
        }
        AppIntent::SetPolygonStrokeColorRequested { polygon_id, color } => {
            vec![AppCommand::SetPolygonStrokeColor { polygon_id, color }]
        }
        AppIntent::SetPolygonOpacityRequested {
            polygon_id,
            opacity,
        } => vec![AppCommand::SetPolygonOpacity {
            polygon_id,
            opacity,
        }],
        AppIntent::RenamePolygonRequested { polygon_id, name } => {
            vec![AppCommand::RenamePolygon { polygon_id, name }]
        }

        AppIntent::AddBackgroundImageRequested {
            src,
            name,
            position,
            size,
        } => vec![AppCommand::AddBackgroundImage {
            src,
            name,
            position,
            size,
        }],
        AppIntent::UpdateBackgroundImageRequested { image_id, patch } => {
            vec![AppCommand::UpdateBackgroundImage { image_id, patch }]
        }
        AppIntent::RemoveBackgroundImageRequested { image_id } => {
            vec![AppCommand::RemoveBackgroundImage { image_id }]
        }
        AppIntent::BackgroundImageDecoded { image_id, size } => {
            vec![AppCommand::SetBackgroundImageSize { image_id, size }]
        }
        AppIntent::ToggleBackgroundVisibilityRequested { image_id } => {
            vec![AppCommand::ToggleBackgroundVisibility { image_id }]
        }
        AppIntent::ToggleBackgroundLockRequested { image_id } => {
            vec![AppCommand::ToggleBackgroundLock { image_id }]
        }

        AppIntent::SaveRequested { path } => vec![AppCommand::SaveFile { path }],
        AppIntent::LoadRequested { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
