//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::ClearAll => handlers::file_io::clear_all(state),

            // === Ansicht ===
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                screen_focus,
            } => handlers::view::zoom_at(state, factor, screen_focus),
            AppCommand::BeginPan { screen_pos } => handlers::view::begin_pan(state, screen_pos),
            AppCommand::PanDrag { screen_pos } => handlers::view::pan_drag(state, screen_pos),
            AppCommand::EndPan => handlers::view::end_pan(state),

            // === Werkzeuge & Sessions ===
            AppCommand::SetEditorTool { tool } => handlers::sessions::set_editor_tool(state, tool),
            AppCommand::UpdateCursor { world_pos } => {
                handlers::sessions::update_cursor(state, world_pos)
            }
            AppCommand::BuildClick { world_pos } => handlers::sessions::build_click(state, world_pos),
            AppCommand::BuildHover { world_pos } => handlers::sessions::build_hover(state, world_pos),
            AppCommand::BuildComplete => handlers::sessions::build_complete(state),
            AppCommand::BuildRemoveLast => handlers::sessions::build_remove_last(state),
            AppCommand::BuildCancel => handlers::sessions::build_cancel(state),
            AppCommand::PolygonClick {
                world_pos,
                close_radius,
            } => handlers::sessions::polygon_click(state, world_pos, close_radius),
            AppCommand::PolygonHover { world_pos } => {
                handlers::sessions::polygon_hover(state, world_pos)
            }
            AppCommand::PolygonClose => handlers::sessions::polygon_close(state),
            AppCommand::PolygonRemoveLast => handlers::sessions::polygon_remove_last(state),
            AppCommand::PolygonCancel => handlers::sessions::polygon_cancel(state),

            // === Editing ===
            AppCommand::AddNodeAtPosition { world_pos } => {
                handlers::editing::add_node(state, world_pos)
            }
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::SetRoadWidth { road_id, width } => {
                handlers::editing::set_road_width(state, road_id, width)
            }
            AppCommand::SetRoadName { road_id, name } => {
                handlers::editing::set_road_name(state, road_id, name)
            }
            AppCommand::SetRoadType { road_id, kind } => {
                handlers::editing::set_road_type(state, road_id, kind)
            }
            AppCommand::SetPolygonFillColor { polygon_id, color } => {
                handlers::editing::set_polygon_fill_color(state, polygon_id, &color)
            }
            AppCommand::SetPolygonStrokeColor { polygon_id, color } => {
                handlers::editing::set_polygon_stroke_color(state, polygon_id, &color)
            }
            AppCommand::SetPolygonOpacity {
                polygon_id,
                opacity,
            } => handlers::editing::set_polygon_opacity(state, polygon_id, opacity),
            AppCommand::RenamePolygon { polygon_id, name } => {
                handlers::editing::rename_polygon(state, polygon_id, name)
            }

            // === Selektion ===
            AppCommand::PointerDown {
                world_pos,
                pick_radius,
                handle_radius,
                hit_tolerance,
            } => handlers::selection::pointer_down(
                state,
                world_pos,
                pick_radius,
                handle_radius,
                hit_tolerance,
            ),
            AppCommand::DragTo { world_pos } => handlers::selection::drag_to(state, world_pos),
            AppCommand::EndDrag => handlers::selection::end_drag(state),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Hintergrundbilder ===
            AppCommand::AddBackgroundImage {
                src,
                name,
                position,
                size,
            } => handlers::background::add(state, src, name, position, size),
            AppCommand::UpdateBackgroundImage { image_id, patch } => {
                handlers::background::update(state, image_id, patch)
            }
            AppCommand::RemoveBackgroundImage { image_id } => {
                handlers::background::remove(state, image_id)
            }
            AppCommand::SetBackgroundImageSize { image_id, size } => {
                handlers::background::set_size(state, image_id, size)
            }
            AppCommand::ToggleBackgroundVisibility { image_id } => {
                handlers::background::toggle_visibility(state, image_id)
            }
            AppCommand::ToggleBackgroundLock { image_id } => {
                handlers::background::toggle_lock(state, image_id)
            }

            // === Einstellungen ===
            AppCommand::SetSnapDistance { distance } => {
                handlers::options::set_snap_distance(state, distance)
            }
            AppCommand::SetGridSnap { enabled } => handlers::options::set_grid_snap(state, enabled),
            AppCommand::SetDefaultRoadWidth { width } => {
                handlers::options::set_default_road_width(state, width)
            }
            AppCommand::SetDefaultRoadType { kind } => {
                handlers::options::set_default_road_type(state, kind)
            }
            AppCommand::SetCurveMode { enabled } => {
                handlers::options::set_curve_mode(state, enabled)
            }
            AppCommand::SetMetersPerPixel { meters_per_pixel } => {
                handlers::options::set_meters_per_pixel(state, meters_per_pixel)
            }
            AppCommand::SetDefaultPolygonStyle { style } => {
                handlers::options::set_default_polygon_style(state, style)
            }
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options)?,
            AppCommand::ResetOptions => handlers::options::reset(state)?,

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }
}
