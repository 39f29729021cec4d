//! UI-related tests for lister
//!
//! These tests focus on the user interface components of the lister TUI application,
//! including formatting, layout and what a frame actually shows.
//!
//! Rendering goes through ratatui's TestBackend, so no real terminal is needed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lister_tui::app::{Application, KeypressResult, Session};
use lister_tui::config::Config;
use lister_tui::core::LocalFs;
use lister_tui::ui::{layout_chunks, render};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use std::error;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn pump_until(session: &mut Session, count: usize) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while session.state().items().len() < count && Instant::now() < deadline {
        session.pump();
        std::thread::sleep(Duration::from_millis(2));
    }
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_long_title_is_cut_to_list_width() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let name = "a_really_long_file_name_that_overflows.txt";
    fs::write(dir.path().join(name), "x")?;

    let config = Config::from_toml("[display]\nlist_width = 16\n")?;
    let app = Application::new(config, Some(dir.path().to_path_buf()));
    let mut session = app.start(LocalFs);
    pump_until(&mut session, 1);

    let mut terminal = Terminal::new(TestBackend::new(80, 12))?;
    terminal.draw(|f| render(f, session.state_mut()))?;

    // The list is 16 columns wide, 14 of them inside the borders
    let buffer = terminal.backend().buffer();
    let row: String = (0..16u16)
        .map(|x| buffer.cell((x, 1u16)).map_or(" ", |c| c.symbol()))
        .collect();
    assert_eq!(row, format!("│{}│", &name[..14]));

    // The header pane is wide enough for the whole name
    assert!(screen_text(&terminal).contains(name));

    session.request_shutdown();
    session.finish();
    Ok(())
}

#[test]
fn test_layout_chunks_with_config() -> Result<(), Box<dyn error::Error>> {
    let size = Rect::new(0, 0, 100, 20);
    let config = Config::from_toml(
        r#"
            [display]
            list_width = 40
        "#,
    )?;

    let app = Application::new(config, None);
    let session = app.start(LocalFs);

    let chunks = layout_chunks(size, session.state());
    assert_eq!(chunks.len(), 4);

    let (list, header, description, footer) = (chunks[0], chunks[1], chunks[2], chunks[3]);
    assert_eq!(list.width, 40);
    assert_eq!(list.height, 20);
    assert_eq!(header.width, 60);
    assert_eq!(header.height, 3);
    assert_eq!(footer.height, 3);
    assert_eq!(description.height, 14);
    assert_eq!(footer.y + footer.height, 20);

    session.request_shutdown();
    session.finish();
    Ok(())
}

#[test]
fn test_frame_shows_selected_item() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("alpha.txt"), "alpha")?;
    fs::write(dir.path().join("beta.txt"), "beta")?;

    let app = Application::new(Config::default(), Some(dir.path().to_path_buf()));
    let mut session = app.start(LocalFs);
    pump_until(&mut session, 2);

    let mut terminal = Terminal::new(TestBackend::new(120, 20))?;
    terminal.draw(|f| render(f, session.state_mut()))?;
    let text = screen_text(&terminal);
    assert!(text.contains("alpha.txt"));
    assert!(text.contains("beta.txt"));
    assert!(text.contains("File size: 5"));
    assert!(text.contains("1/2: "));

    let result = session
        .state_mut()
        .handle_keypress(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
    assert_eq!(result, KeypressResult::Consumed);

    terminal.draw(|f| render(f, session.state_mut()))?;
    let text = screen_text(&terminal);
    assert!(text.contains("File size: 4"));
    assert!(text.contains("2/2: "));

    let result = session
        .state_mut()
        .handle_keypress(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert_eq!(result, KeypressResult::Quit);
    session.finish();
    Ok(())
}

#[test]
fn test_render_before_any_item() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let app = Application::new(Config::default(), Some(dir.path().to_path_buf()));
    let mut session = app.start(LocalFs);

    let mut terminal = Terminal::new(TestBackend::new(60, 12))?;
    terminal.draw(|f| render(f, session.state_mut()))?;
    assert!(session.state().items().is_empty());

    session.request_shutdown();
    session.finish();
    Ok(())
}
