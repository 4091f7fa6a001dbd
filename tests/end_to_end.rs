use dbacks_calendar::{
    CalendarError, CalendarImage, GameKind, PageCanvas, PaintOp, Palette, ScheduleIndex,
};
use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

const APRIL_GAMES: &str = r#"[
    {"date": "2025-04-01", "homegame": true,  "teamcode": "NYY", "firstpitch": "6:40 PM"},
    {"date": "2025-04-02", "homegame": true,  "teamcode": "NYY", "firstpitch": "6:40 PM"},
    {"date": "2025-04-04", "homegame": false, "teamcode": "WSH", "firstpitch": "4:05 PM"},
    {"date": "2025-04-05", "homegame": false, "teamcode": "WSH", "firstpitch": "1:05 PM"},
    {"date": "2025-04-30", "homegame": true,  "teamcode": "SD",  "firstpitch": "12:40 PM"},
    {"date": "2025-05-01", "homegame": true,  "teamcode": "SD",  "firstpitch": "6:40 PM"}
]"#;

fn schedule() -> ScheduleIndex {
    ScheduleIndex::from_json_str(APRIL_GAMES).unwrap()
}

#[test]
fn april_renders() {
    let schedule = schedule();
    let image = CalendarImage::new("April", &schedule).unwrap();

    assert_eq!(image.month().name(), "April");
    assert_eq!(image.cells().count(), 30);
    assert!((5..=6).contains(&image.weeks().len()));
    assert!(!image.png_bytes().is_empty());
    assert!(image.as_data_url().len() > "data:image/png;base64,".len());
}

#[test]
fn off_season_and_unknown_months_fail() {
    let schedule = schedule();
    assert!(matches!(
        CalendarImage::new("October", &schedule),
        Err(CalendarError::OffSeasonMonth(_))
    ));
    assert!(matches!(
        CalendarImage::new("Fooember", &schedule),
        Err(CalendarError::InvalidMonth(_))
    ));
}

#[test]
fn cells_follow_the_schedule() {
    let schedule = schedule();
    let image = CalendarImage::new("April", &schedule).unwrap();
    let palette = Palette::DIAMONDBACKS;

    for cell in image.cells() {
        match schedule.lookup(&cell.date_key) {
            Some(game) if game.is_home_game => {
                assert_eq!(cell.kind(), GameKind::Home);
                assert_eq!(cell.background_color, palette.accent);
                assert_eq!(cell.text_color, palette.paper);
                assert_eq!(cell.team_label.as_deref(), Some(game.team_code.as_str()));
            }
            Some(game) => {
                assert_eq!(cell.kind(), GameKind::Away);
                assert_eq!(cell.background_color, palette.paper);
                assert_eq!(cell.text_color, palette.ink);
                assert_eq!(cell.team_label.as_deref(), Some(game.team_code.as_str()));
                assert!(cell.first_pitch_label.is_some());
            }
            None => {
                assert_eq!(cell.kind(), GameKind::NoGame);
                assert!(cell.team_label.is_none());
                assert!(cell.first_pitch_label.is_none());
            }
        }
    }

    let last = image.cells().last().unwrap();
    assert_eq!(last.first_pitch_label.as_deref(), Some("12:40"));
}

#[test]
fn renders_are_deterministic() {
    let schedule = schedule();
    let first = CalendarImage::new("July", &schedule).unwrap();
    let second = CalendarImage::new("July", &schedule).unwrap();

    assert_eq!(first.layout(), second.layout());
    assert_eq!(first.weeks(), second.weeks());
    assert_eq!(first.display_list(), second.display_list());
    assert_eq!(first.png_bytes(), second.png_bytes());
}

#[test]
fn cells_are_painted_background_then_border_then_text() {
    let schedule = schedule();
    let image = CalendarImage::new("April", &schedule).unwrap();
    let ops = image.display_list().ops();

    assert!(matches!(ops[0], PaintOp::Clear(_)));

    let title_at = ops
        .iter()
        .position(|op| matches!(op, PaintOp::Text { text, .. } if text == "April 2025"))
        .unwrap();

    for cell in image.cells() {
        let fill_at = ops
            .iter()
            .position(|op| matches!(op, PaintOp::FillRect { area, .. } if *area == cell.geometry))
            .unwrap();
        assert!(matches!(
            &ops[fill_at + 1],
            PaintOp::StrokeRect { area, .. } if *area == cell.geometry
        ));
        assert!(matches!(
            &ops[fill_at + 2],
            PaintOp::Text { text, .. } if *text == cell.day_number.to_string()
        ));
        assert!(fill_at < title_at);
    }

    // nothing but marginalia after the title
    assert!(ops[title_at..].iter().all(|op| match op {
        PaintOp::FillRect { area, .. } | PaintOp::StrokeRect { area, .. } =>
            *area == image.layout().legend || *area == image.layout().legend_away(),
        _ => true,
    }));
}

#[test]
fn painted_page_shows_home_and_away_days() {
    let schedule = schedule();
    let image = CalendarImage::new("April", &schedule).unwrap();
    let palette = Palette::DIAMONDBACKS;

    let mut canvas = PageCanvas::new(image.layout().page, Rgb888::new(1, 2, 3));
    image.display_list().paint(&mut canvas).unwrap();

    let cells: Vec<_> = image.cells().collect();
    let home = cells[0].geometry;
    let away = cells[3].geometry;
    let probe = |area: &embedded_graphics::primitives::Rectangle| {
        area.top_left + Point::new(area.size.width as i32 - 10, area.size.height as i32 / 2)
    };

    assert_eq!(canvas.pixel(probe(&home)), Some(palette.accent));
    assert_eq!(canvas.pixel(probe(&away)), Some(palette.paper));
    // grid line on the left edge of the home cell
    assert_eq!(
        canvas.pixel(home.top_left + Point::new(0, 150)),
        Some(palette.ink)
    );
    // primed page, nothing left of the grid
    assert_eq!(canvas.pixel(Point::new(10, 10)), Some(palette.paper));
    // the HOME legend box
    let legend = image.layout().legend;
    assert_eq!(
        canvas.pixel(legend.top_left + Point::new(190, 70)),
        Some(palette.accent)
    );
}
