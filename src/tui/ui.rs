//! Frame composition.
//!
//! ```text
//! ┌ title bar ─────────────────────────────────────┐ 1 row
//! │ transport banner (only after a failure)        │ wrapped
//! │ mission body (scroll view) or placeholder      │ fill
//! │ query editor (active mission only)             │ 3..10 rows
//! └ footer ────────────────────────────────────────┘ 2 rows
//! ```
//!
//! What goes into the body is decided by `core::view::screen`; this module
//! only maps the view model onto components.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::state::{App, RequestKind};
use crate::core::view::{Console, MissionView, Screen, screen};
use crate::tui::TuiState;
use crate::tui::component::{Component, Section};
use crate::tui::components::{
    Briefing, ErrorPanel, Findings, FlashList, Footer, MissionBody, Placeholder, ProceedPanel,
    ResultsTable, TitleBar,
};

const FOOTER_HEIGHT: u16 = 2;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let view = screen(app);
    let on_mission = matches!(view, Screen::Mission(_));
    let area = frame.area();

    let banner = match &view {
        Screen::Mission(mission) => mission.transport_error.map(transport_banner),
        _ => None,
    };
    let banner_height = banner
        .as_ref()
        .map_or(0, |p| p.line_count(area.width) as u16);

    let editor_height = match &view {
        Screen::Mission(MissionView {
            console: Console::QueryForm { .. },
            ..
        }) => tui.editor.calculate_height(area.width),
        _ => 0,
    };

    let [title_area, banner_area, body_area, editor_area, footer_area] = Layout::vertical([
        Length(1),
        Length(banner_height),
        Min(0),
        Length(editor_height),
        Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    TitleBar {
        status_message: &app.status_message,
        server_label: &app.server_label,
        busy: app.is_busy(),
        spinner_frame,
        last_synced: app.last_synced,
    }
    .render(frame, title_area);

    if let Some(banner) = banner {
        frame.render_widget(banner, banner_area);
    }

    match view {
        Screen::Loading => Placeholder::Loading { spinner_frame }.render(frame, body_area),
        Screen::CriticalError => Placeholder::CriticalError {
            detail: app.transport_error.as_deref(),
        }
        .render(frame, body_area),
        Screen::Mission(mission) => {
            draw_mission(frame, app, tui, &mission, body_area);
            if let Console::QueryForm { busy } = mission.console {
                tui.editor.busy = busy;
                tui.editor.render(frame, editor_area);
            }
        }
    }

    Footer {
        show_reset: on_mission,
        reset_pending: app.is_pending(RequestKind::ResetProgress),
    }
    .render(frame, footer_area);

    if let Some(dialog) = tui.confirm_reset.as_mut() {
        dialog.render(frame, area);
    }
}

fn draw_mission(frame: &mut Frame, app: &App, tui: &mut TuiState, view: &MissionView, area: Rect) {
    let mut sections: Vec<Box<dyn Section + '_>> = vec![
        Box::new(FlashList {
            flashes: view.flashes,
        }),
        Box::new(Briefing {
            title: view.briefing_title(),
            mission: view.mission,
            completed: view.completed,
            is_final: view.is_final,
        }),
    ];
    if view.console == Console::Proceed {
        sections.push(Box::new(ProceedPanel {
            pending: app.is_pending(RequestKind::NextMission),
        }));
    }
    if let Some(message) = view.error {
        sections.push(Box::new(ErrorPanel { message }));
    }
    if let Some((columns, rows)) = view.results {
        sections.push(Box::new(ResultsTable { columns, rows }));
    }
    if let Some(items) = view.findings {
        sections.push(Box::new(Findings { items }));
    }

    MissionBody {
        state: &mut tui.body,
        sections,
    }
    .render(frame, area);
}

fn transport_banner(message: &str) -> Paragraph<'_> {
    let style = Style::default().fg(Color::White).bg(Color::Red);
    Paragraph::new(Line::from(vec![
        Span::styled(" FALLO DE COMUNICACIÓN: ", style.add_modifier(Modifier::BOLD)),
        Span::styled(message, style),
    ]))
    .style(style)
    .wrap(Wrap { trim: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, FlashCategory, FlashMessage, GameState};
    use crate::core::action::{Action, Effect, update};
    use crate::test_support::{active_state, completed_state, loaded_app, test_app};
    use crate::tui::components::ConfirmDialog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        render_sized(app, tui, 100)
    }

    fn render_sized(app: &App, tui: &mut TuiState, width: u16) -> String {
        let backend = TestBackend::new(width, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn render_app(app: &App) -> String {
        render(app, &mut TuiState::new())
    }

    #[test]
    fn test_loading_screen() {
        let text = render_app(&test_app());
        assert!(text.contains("Cargando Sistema..."));
        assert!(text.contains("Conectando..."));
        assert!(!text.contains("ENTRADA DE CONSULTA SQL"));
        assert!(!text.contains("REINICIAR SIMULACIÓN"));
    }

    #[test]
    fn test_failed_initial_load_shows_critical_error() {
        let mut app = test_app();
        let Effect::Request { seq, .. } = update(&mut app, Action::LoadState) else {
            panic!("Expected a request effect");
        };
        update(
            &mut app,
            Action::Response {
                seq,
                result: Err(ApiError::Network("connection refused".to_string())),
            },
        );

        let text = render_app(&app);
        assert!(text.contains("Error crítico del sistema. No se pudo cargar la misión."));
        assert!(text.contains("connection refused"));
        assert!(!text.contains("Cargando Sistema..."));
        assert!(!text.contains("REINICIAR SIMULACIÓN"));
    }

    #[test]
    fn test_missing_mission_shows_critical_error() {
        let text = render_app(&loaded_app(GameState::default()));
        assert!(text.contains("Error crítico del sistema."));
        assert!(!text.contains("REINICIAR SIMULACIÓN"));
    }

    #[test]
    fn test_active_mission_screen() {
        let text = render_app(&loaded_app(active_state()));
        assert!(text.contains("[DIRECTIVA ACTUAL: Operación Filtración]"));
        assert!(text.contains("ASUNTO: Movimientos sospechosos"));
        assert!(text.contains("ENTRADA DE CONSULTA SQL"));
        assert!(text.contains("HALLAZGOS ARCHIVADOS:"));
        assert!(text.contains("El expediente 12 fue alterado."));
        assert!(text.contains("REINICIAR SIMULACIÓN"));
        assert!(!text.contains("CONTINUAR A LA SIGUIENTE DIRECTIVA"));
    }

    #[test]
    fn test_completed_mission_screen() {
        let mut state = completed_state();
        state.flash_messages = vec![FlashMessage {
            category: FlashCategory::Success,
            message: "¡Directiva cumplida!".to_string(),
        }];
        state.error = Some("no debería verse".to_string());

        let text = render_app(&loaded_app(state));
        assert!(text.contains("[DIRECTIVA COMPLETADA: Operación Filtración]"));
        assert!(text.contains("CONTINUAR A LA SIGUIENTE DIRECTIVA"));
        assert!(text.contains("¡Directiva cumplida!"));
        assert!(!text.contains("ENTRADA DE CONSULTA SQL"));
        assert!(!text.contains("no debería verse"));
    }

    #[test]
    fn test_query_error_and_results() {
        let mut state = active_state();
        state.error = Some("no such table: leakz".to_string());
        let text = render_app(&loaded_app(state));
        assert!(text.contains("ERROR DE SISTEMA / CONSULTA:"));
        assert!(text.contains("no such table: leakz"));
        assert!(!text.contains("RESULTADOS DE LA CONSULTA"));

        let mut state = active_state();
        state.columns = Some(vec!["alias".to_string()]);
        state.results = Some(vec![
            serde_json::from_str(r#"{"alias": "Topo"}"#).unwrap(),
        ]);
        let text = render_app(&loaded_app(state));
        assert!(text.contains("RESULTADOS DE LA CONSULTA"));
        assert!(text.contains("Topo"));
    }

    #[test]
    fn test_transport_error_banner_keeps_last_snapshot() {
        let mut app = loaded_app(active_state());
        let Effect::Request { seq, .. } = update(&mut app, Action::SubmitQuery) else {
            panic!("Expected a request effect");
        };
        update(
            &mut app,
            Action::Response {
                seq,
                result: Err(ApiError::Network("timeout".to_string())),
            },
        );

        let text = render_app(&app);
        assert!(text.contains("FALLO DE COMUNICACIÓN:"));
        assert!(text.contains("timeout"));
        assert!(text.contains("[DIRECTIVA ACTUAL: Operación Filtración]"));
    }

    #[test]
    fn test_final_mission_marker() {
        let mut state = completed_state();
        state.is_final_mission = true;
        let text = render_app(&loaded_app(state));
        assert!(text.contains("EVALUACIÓN CONCLUIDA"));
        assert!(text.contains("[DIRECTIVA COMPLETADA: Operación Filtración]"));
    }

    #[test]
    fn test_narrow_terminal_keeps_status_and_marker() {
        let mut state = completed_state();
        state.is_final_mission = true;
        let mut app = loaded_app(state);
        app.status_message = "EN LÍNEA".to_string();
        let text = render_sized(&app, &mut TuiState::new(), 80);
        assert!(text.contains("EN LÍNEA"));
        assert!(text.contains("EVALUACIÓN CONCLUIDA"));
        assert!(text.contains("REINICIAR SIMULACIÓN"));
    }

    #[test]
    fn test_confirm_overlay() {
        let app = loaded_app(active_state());
        let mut tui = TuiState::new();
        tui.confirm_reset = Some(ConfirmDialog);
        let text = render(&app, &mut tui);
        assert!(text.contains("¿Está seguro de que desea reiniciar todo el progreso?"));
    }

    #[test]
    fn test_editor_reflects_busy_state() {
        let mut app = loaded_app(active_state());
        app.query = "SELECT 1".to_string();
        let mut tui = TuiState::new();
        tui.editor.sync(&app.query);
        update(&mut app, Action::SubmitQuery);

        let text = render(&app, &mut tui);
        assert!(tui.editor.busy);
        assert!(text.contains("PROCESANDO..."));
        assert!(text.contains("SELECT 1"));
    }

}
