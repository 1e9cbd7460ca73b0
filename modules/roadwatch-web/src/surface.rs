use std::time::Duration;

use roadwatch_common::{Bounds, LatLng};
use roadwatch_map::{FitOptions, LineStyle, MapSurface, MarkerId, PanelContent, ShapeId, Viewport};
use serde::Serialize;

use crate::templates::{html_escape, render_marker_popup, render_panel};

/// One instruction for the browser-side script, which applies it to Leaflet and the DOM.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceCommand {
    InitViewport {
        viewport: Viewport,
    },
    DrawLine {
        shape: ShapeId,
        points: Vec<LatLng>,
        style: LineStyle,
        tooltip: String,
    },
    SetStyle {
        shape: ShapeId,
        style: LineStyle,
    },
    FitBounds {
        bounds: Bounds,
        padding: u16,
        max_zoom: u8,
    },
    SetView {
        center: LatLng,
        zoom: u8,
    },
    AddMarker {
        marker: MarkerId,
        at: LatLng,
        popup: String,
        popup_ttl_ms: u64,
    },
    RemoveMarker {
        marker: MarkerId,
    },
    ShowPanel {
        html: String,
    },
    HidePanel,
    SetHeader {
        text: String,
    },
    Alert {
        message: String,
    },
    SetSearchBusy {
        busy: bool,
    },
    ClearSearchInput,
}

/// Map surface that queues commands until the next HTTP response drains them.
#[derive(Debug, Default)]
pub struct ScriptSurface {
    commands: Vec<SurfaceCommand>,
    next_shape: u64,
    next_marker: u64,
}

impl ScriptSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl MapSurface for ScriptSurface {
    fn init_viewport(&mut self, viewport: &Viewport) {
        self.commands.push(SurfaceCommand::InitViewport {
            viewport: *viewport,
        });
    }

    fn draw_line(&mut self, points: &[LatLng], style: LineStyle, tooltip: &str) -> ShapeId {
        let shape = ShapeId(self.next_shape);
        self.next_shape += 1;
        self.commands.push(SurfaceCommand::DrawLine {
            shape,
            points: points.to_vec(),
            style,
            tooltip: html_escape(tooltip),
        });
        shape
    }

    fn set_style(&mut self, shape: ShapeId, style: LineStyle) {
        self.commands.push(SurfaceCommand::SetStyle { shape, style });
    }

    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions) {
        self.commands.push(SurfaceCommand::FitBounds {
            bounds,
            padding: options.padding,
            max_zoom: options.max_zoom,
        });
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.commands.push(SurfaceCommand::SetView { center, zoom });
    }

    fn add_marker(&mut self, at: LatLng, popup: &str, popup_ttl: Duration) -> MarkerId {
        let marker = MarkerId(self.next_marker);
        self.next_marker += 1;
        self.commands.push(SurfaceCommand::AddMarker {
            marker,
            at,
            popup: render_marker_popup(popup),
            popup_ttl_ms: popup_ttl.as_millis() as u64,
        });
        marker
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        self.commands.push(SurfaceCommand::RemoveMarker { marker });
    }

    fn show_panel(&mut self, content: &PanelContent) {
        self.commands.push(SurfaceCommand::ShowPanel {
            html: render_panel(content),
        });
    }

    fn hide_panel(&mut self) {
        self.commands.push(SurfaceCommand::HidePanel);
    }

    fn set_header(&mut self, text: &str) {
        self.commands.push(SurfaceCommand::SetHeader {
            text: text.to_string(),
        });
    }

    fn alert(&mut self, message: &str) {
        self.commands.push(SurfaceCommand::Alert {
            message: message.to_string(),
        });
    }

    fn set_search_busy(&mut self, busy: bool) {
        self.commands.push(SurfaceCommand::SetSearchBusy { busy });
    }

    fn clear_search_input(&mut self) {
        self.commands.push(SurfaceCommand::ClearSearchInput);
    }
}
