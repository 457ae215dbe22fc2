use crate::app::{
    FormState, RouteCommand, RouteRecord, RouteState, Screen, StatusMessage, handle_command,
    tick_animation,
};
use crate::auth::UserStore;
use crate::core::Graph;
use crate::visualizer::{CanvasViewport, RenderConfig, build_scene, render_scene};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use std::io;
use std::io::Write;
use std::time::Instant;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    Ok(())
}

pub enum ConsoleInput {
    Key(KeyEvent),
    Click { column: u16, row: u16 },
    Timeout,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(ConsoleInput::Key(key));
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                return Ok(ConsoleInput::Click { column: mouse.column, row: mouse.row });
            }
            _ => {}
        }
    }
    Ok(ConsoleInput::Timeout)
}

/// Which selector the next digit key feeds, the keyboard stand-in for the
/// origin / destination dropdowns.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PendingSelector {
    Origin,
    Destination,
}

pub struct App {
    pub screen: Screen,
    pub store: UserStore,
    pub session_name: Option<String>,
    pub register_form: FormState,
    pub login_form: FormState,
    pub form_message: Option<StatusMessage>,
    pub route: RouteState,
    viewport: CanvasViewport,
    pending_selector: Option<PendingSelector>,
}

impl App {
    pub fn new(store: UserStore, graph: Graph, config: RenderConfig) -> Self {
        // A persisted session skips the welcome flow entirely.
        let session_name = store.current_session().map(|user| user.name.clone());
        let screen = if session_name.is_some() { Screen::Main } else { Screen::Welcome };

        App {
            screen,
            store,
            session_name,
            register_form: FormState::register_form(),
            login_form: FormState::login_form(),
            form_message: None,
            route: RouteState::new(graph, config),
            viewport: CanvasViewport::default(),
            pending_selector: None,
        }
    }
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    route_log: &mut std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tick_animation(&mut app.route, Instant::now());
        terminal.draw(|f| draw(f, &mut app))?;

        match handle_input()? {
            ConsoleInput::Timeout => {}
            ConsoleInput::Click { column, row } => {
                if app.screen == Screen::Main {
                    if let Some((x, y)) = app.viewport.surface_point(column, row) {
                        handle_command(
                            &mut app.route,
                            RouteCommand::CanvasClick { x, y },
                            Instant::now(),
                        );
                    }
                }
            }
            ConsoleInput::Key(key) => {
                if !handle_key(&mut app, key, route_log)? {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn handle_key(
    app: &mut App,
    key: KeyEvent,
    route_log: &mut std::fs::File,
) -> Result<bool, Box<dyn std::error::Error>> {
    match app.screen {
        Screen::Welcome => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(false),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                app.form_message = None;
                app.screen = Screen::Register;
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                app.form_message = None;
                app.screen = Screen::Login;
            }
            _ => {}
        },
        Screen::Register => match key.code {
            KeyCode::Esc => {
                app.form_message = None;
                app.screen = Screen::Welcome;
            }
            KeyCode::Tab | KeyCode::Down => app.register_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.register_form.focus_prev(),
            KeyCode::Backspace => app.register_form.backspace(),
            KeyCode::Enter => submit_register(app),
            KeyCode::Char(ch) => app.register_form.push_char(ch),
            _ => {}
        },
        Screen::Login => match key.code {
            KeyCode::Esc => {
                app.form_message = None;
                app.screen = Screen::Welcome;
            }
            KeyCode::Tab | KeyCode::Down => app.login_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.login_form.focus_prev(),
            KeyCode::Backspace => app.login_form.backspace(),
            KeyCode::Enter => submit_login(app),
            KeyCode::Char(ch) => app.login_form.push_char(ch),
            _ => {}
        },
        Screen::Main => return handle_main_key(app, key, route_log),
    }
    Ok(true)
}

fn submit_register(app: &mut App) {
    let name = app.register_form.value(0).to_string();
    let email = app.register_form.value(1).to_string();
    let password = app.register_form.fields[2].value.clone();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        app.form_message = Some(StatusMessage::error("All fields are required"));
        return;
    }

    match app.store.register(&name, &email, &password) {
        Ok(()) => {
            app.register_form.reset();
            app.form_message = Some(StatusMessage::info("Registered. You can log in now."));
            app.screen = Screen::Login;
        }
        Err(err) => app.form_message = Some(StatusMessage::error(err.to_string())),
    }
}

fn submit_login(app: &mut App) {
    let email = app.login_form.value(0).to_string();
    let password = app.login_form.fields[1].value.clone();

    match app.store.login(&email, &password) {
        Ok(user) => {
            app.login_form.reset();
            app.form_message = None;
            app.session_name = Some(user.name);
            app.screen = Screen::Main;
        }
        Err(err) => app.form_message = Some(StatusMessage::error(err.to_string())),
    }
}

fn handle_main_key(
    app: &mut App,
    key: KeyEvent,
    route_log: &mut std::fs::File,
) -> Result<bool, Box<dyn std::error::Error>> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(false),
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.pending_selector = Some(PendingSelector::Origin);
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.pending_selector = Some(PendingSelector::Destination);
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(selector) = app.pending_selector.take() {
                apply_digit_selection(app, selector, ch);
            }
        }
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter => {
            let record =
                handle_command(&mut app.route, RouteCommand::CalculateRoute, Instant::now());
            if let Some(record) = record {
                append_route_log(route_log, &record)?;
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.pending_selector = None;
            handle_command(&mut app.route, RouteCommand::NewRoute, Instant::now());
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            if let Err(err) = app.store.logout() {
                app.route.message = Some(StatusMessage::error(err.to_string()));
                return Ok(true);
            }
            app.session_name = None;
            app.pending_selector = None;
            handle_command(&mut app.route, RouteCommand::NewRoute, Instant::now());
            app.screen = Screen::Welcome;
        }
        _ => {}
    }
    Ok(true)
}

fn apply_digit_selection(app: &mut App, selector: PendingSelector, digit: char) {
    // Stop labels are 1-based on screen.
    let label = digit.to_digit(10).unwrap_or(0) as usize;
    if label == 0 || label > app.route.graph.node_count() {
        return;
    }
    let node = Some(label - 1);

    let command = match selector {
        PendingSelector::Origin => RouteCommand::OriginSelected(node),
        PendingSelector::Destination => RouteCommand::DestinationSelected(node),
    };
    handle_command(&mut app.route, command, Instant::now());
}

fn append_route_log(
    route_log: &mut std::fs::File,
    record: &RouteRecord,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(
        route_log,
        "route {} -> {}: {:?} total {}s",
        record.origin, record.destination, record.nodes, record.total_time
    )?;
    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Welcome => draw_welcome(frame, app),
        Screen::Register => draw_form(frame, "Register", &app.register_form, &app.form_message),
        Screen::Login => draw_form(frame, "Log in", &app.login_form, &app.form_message),
        Screen::Main => draw_main(frame, app),
    }
}

fn draw_welcome(frame: &mut Frame, app: &App) {
    let mut text = String::from(
        "Welcome to the route planner.\n\n\
         R - register a new account\n\
         L - log in\n\
         Q - quit",
    );
    if let Some(message) = &app.form_message {
        text.push_str("\n\n");
        text.push_str(&message.text);
    }

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Route Planner"))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, frame.area());
}

fn draw_form(frame: &mut Frame, title: &str, form: &FormState, message: &Option<StatusMessage>) {
    let mut constraints = vec![Constraint::Length(3); form.fields.len()];
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    for (index, field) in form.fields.iter().enumerate() {
        let shown = if field.masked { "*".repeat(field.value.len()) } else { field.value.clone() };
        let style = if index == form.focus {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let paragraph = Paragraph::new(shown)
            .block(Block::default().borders(Borders::ALL).title(field.label))
            .style(style);
        frame.render_widget(paragraph, chunks[index]);
    }

    let hint = format!(
        "{} | Tab next field, Enter submit, Esc back",
        message.as_ref().map(|m| m.text.as_str()).unwrap_or(title)
    );
    let hint_style = match message {
        Some(m) if m.is_error => Style::default().fg(Color::Red),
        Some(_) => Style::default().fg(Color::Green),
        None => Style::default().fg(Color::Cyan),
    };
    let paragraph = Paragraph::new(hint).style(hint_style).alignment(Alignment::Center);
    frame.render_widget(paragraph, chunks[form.fields.len()]);
}

fn draw_main(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    let scene = build_scene(
        &app.route.graph,
        app.route.selection,
        &app.route.path_edges,
        app.route.current_path(),
    );
    app.viewport = render_scene(frame, chunks[1], &scene, &app.route.config);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Trip progress"))
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(app.route.progress.clamp(0.0, 1.0))
        .label(format!("{}%", (app.route.progress * 100.0).round() as u32));
    frame.render_widget(gauge, chunks[2]);

    draw_status(frame, chunks[3], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let rider = app.session_name.as_deref().unwrap_or("rider");
    let header = format!(
        "Hello {}. Click two stops, or press O/D then a stop number. \
         C calculate, N new route, X log out, Q quit.",
        rider
    );
    let paragraph = Paragraph::new(header)
        .block(Block::default().borders(Borders::ALL).title("Route Planner"))
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let selection = &app.route.selection;
    let describe = |node: Option<usize>| match node {
        Some(id) => (id + 1).to_string(),
        None => "-".to_string(),
    };

    let mut lines = vec![format!(
        "Origin: {}   Destination: {}",
        describe(selection.origin),
        describe(selection.destination)
    )];

    if let Some(results) = &app.route.results {
        lines.push(format!(
            "Total time: {}s   Cost: ${:.2}",
            results.total_time, results.cost
        ));
    }

    let (text, style) = match &app.route.message {
        Some(message) if message.is_error => {
            lines.push(message.text.clone());
            (lines.join("\n"), Style::default().fg(Color::Red))
        }
        Some(message) => {
            lines.push(message.text.clone());
            (lines.join("\n"), Style::default().fg(Color::Green))
        }
        None => (lines.join("\n"), Style::default().fg(Color::White)),
    };

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Trip"))
        .style(style);
    frame.render_widget(paragraph, area);
}
