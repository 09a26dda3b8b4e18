//! Mode screens

use core::fmt::Write;

use calcwatch_display::{draw_glyph_run, Framebuffer};
use heapless::String;

use crate::device::{Key, TimeSnapshot};
use crate::state::modes::home::display_hours;
use crate::state::{CasioState, Mode};
use crate::time::{duration_breakdown, DateTime};

use super::{header, indicators, main_digits, secondary_digits};

/// Formatted screen line
type Line = String<24>;

/// Whether a screen may hand over to another mode's screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlays {
    Allowed,
    /// Already inside an overlay; draw plainly
    Suppressed,
}

/// Draw the active mode's screen
pub fn draw_mode(fb: &mut Framebuffer, watch: &CasioState, now: TimeSnapshot) {
    match watch.mode() {
        Mode::Home => home(fb, watch, Overlays::Allowed),
        Mode::Database => database(fb, watch),
        Mode::Calculator => calculator(fb, watch),
        Mode::Alarm => alarm(fb, watch),
        Mode::Stopwatch => stopwatch(fb, watch, now),
        Mode::DualTime => dual_time(fb, watch, Overlays::Allowed),
    }
}

/// Blinking colon: on during even seconds
fn colon(seconds: u8) -> char {
    if seconds % 2 == 0 {
        ':'
    } else {
        ' '
    }
}

/// Main time line: "hh:mm ss"
fn main_time(fb: &mut Framebuffer, watch: &CasioState, dt: &DateTime) {
    let use_24h = watch.home().use_24h;
    indicators::meridiem1(fb, use_24h, dt.time.hours);

    let mut line = Line::new();
    let _ = write!(
        line,
        "{:2}:{:02} {:02}",
        display_hours(use_24h, dt.time.hours),
        dt.time.minutes,
        dt.time.seconds
    );
    main_digits(fb, &line);
}

/// Home time with blinking colon, followed by `suffix`
fn secondary_clock(fb: &mut Framebuffer, watch: &CasioState, suffix: core::fmt::Arguments<'_>) {
    let now = &watch.home().now;
    indicators::meridiem2(fb, watch.home().use_24h, now.time.hours);

    let mut line = Line::new();
    let _ = write!(
        line,
        "{:2}{}{:02}{}",
        watch.home().display_hours(now.time.hours),
        colon(now.time.seconds),
        now.time.minutes,
        suffix
    );
    secondary_digits(fb, &line);
}

fn home(fb: &mut Framebuffer, watch: &CasioState, overlays: Overlays) {
    if overlays == Overlays::Allowed {
        if watch.home().show_database {
            return database(fb, watch);
        }
        if watch.home().show_dual_time {
            return dual_time(fb, watch, Overlays::Suppressed);
        }
    }

    let now = &watch.home().now;
    main_time(fb, watch, now);

    let mut line = Line::new();
    let _ = write!(
        line,
        "{:2} {:02} {:2}-{:2}",
        now.date.year / 100,
        now.date.year % 100,
        now.date.month,
        now.date.day
    );
    secondary_digits(fb, &line);

    header(fb, watch.home().language.weekday_name(now.date.weekday));
}

/// Glyphs per database page: 8 in the header, 10 on each body row
const PAGE_ROWS: [(i32, i32, u8); 3] = [(25, 0, 8), (5, 23, 10), (5, 45, 10)];

fn database(fb: &mut Framebuffer, watch: &CasioState) {
    let db = watch.database();

    if db.intro_active() {
        header(fb, "\u{01}DB");
        main_digits(fb, " F: 15");
        return;
    }

    match db.first_glyph() {
        Some(first) => {
            let mut glyph = first;
            for (x, y, count) in PAGE_ROWS {
                let mut run = [0u8; 10];
                for slot in run.iter_mut().take(count as usize) {
                    *slot = glyph;
                    glyph = glyph.saturating_add(1);
                }
                draw_glyph_run(fb, x, y, 2, &run[..count as usize]);
            }
        }
        None => {
            header(fb, &db.label);
            main_digits(fb, "--------");
            secondary_digits(fb, " - -- -- --");
        }
    }
}

fn calculator(fb: &mut Framebuffer, watch: &CasioState) {
    let calc = watch.calculator();
    main_digits(fb, &calc.display());

    match calc.operator {
        Some(op) => {
            let mut line = Line::new();
            let _ = write!(line, "  {}", op.symbol());
            header(fb, &line);
        }
        None => header(fb, "\u{06}\u{07}\u{08}"),
    }

    secondary_clock(fb, watch, format_args!(""));
}

fn alarm(fb: &mut Framebuffer, watch: &CasioState) {
    header(fb, "\u{04}AL");
    main_digits(fb, "12:00 - 1");
    secondary_clock(fb, watch, format_args!(" --- -"));

    let Some(key) = watch.alarm().cursor else {
        return;
    };
    match key {
        Key::Digit0 => {
            indicators::pm1(fb);
            indicators::pm2(fb);
        }
        Key::Digit1 => {
            indicators::am1(fb);
            indicators::am2(fb);
        }
        Key::Digit2 => {
            indicators::split(fb);
            indicators::dst(fb);
        }
        Key::Digit3 => indicators::snooze(fb),
        Key::Digit4 => indicators::mute(fb),
        Key::Digit5 | Key::Digit6 | Key::Digit7 | Key::Digit8 | Key::Digit9 => {
            indicators::alarm(fb, key.index() - 4);
        }
        Key::A => {
            indicators::sig(fb);
            indicators::lt(fb);
            indicators::three_sec(fb);
        }
        Key::Star => {
            indicators::pm1(fb);
            indicators::pm2(fb);
            indicators::am1(fb);
            indicators::am2(fb);
            for n in 1..=5 {
                indicators::alarm(fb, n);
            }
            indicators::split(fb);
            indicators::dst(fb);
            indicators::sig(fb);
            indicators::lt(fb);
            indicators::three_sec(fb);
            indicators::snooze(fb);
            indicators::mute(fb);
        }
        Key::B | Key::C | Key::D | Key::Pound => {}
    }
}

fn stopwatch(fb: &mut Framebuffer, watch: &CasioState, now: TimeSnapshot) {
    let sw = watch.stopwatch();
    let shown = sw.shown_duration(now.ticks);

    if sw.split_held {
        indicators::split(fb);
    }

    // Colon blinks on the half second while running
    let delim = if sw.running && duration_breakdown(sw.elapsed(now.ticks)).hundredths >= 50 {
        ' '
    } else {
        ':'
    };

    let mut line = Line::new();
    let _ = write!(
        line,
        "{:2}{}{:02} {:02}",
        shown.hours, delim, shown.minutes, shown.seconds
    );
    main_digits(fb, &line);

    secondary_clock(fb, watch, format_args!("    {:02}", shown.hundredths));

    header(fb, "\u{0A}ST");
}

fn dual_time(fb: &mut Framebuffer, watch: &CasioState, overlays: Overlays) {
    if overlays == Overlays::Allowed {
        if watch.dual_time().show_home {
            return home(fb, watch, Overlays::Suppressed);
        }
        if watch.dual_time().show_database {
            return database(fb, watch);
        }
    }

    main_time(fb, watch, &watch.dual_time().now);
    secondary_clock(fb, watch, format_args!(""));
    header(fb, "\u{05}DT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Event;
    use crate::ui::render;
    use calcwatch_display::draw_text;

    fn frame(watch: &CasioState, now: TimeSnapshot) -> Framebuffer {
        let mut fb = Framebuffer::new();
        render(&mut fb, watch, now);
        fb
    }

    fn in_mode(mode: Mode) -> CasioState {
        let mut watch = CasioState::default();
        while watch.mode() != mode {
            watch.process(
                Event::ButtonPressed(crate::device::Button::Mode),
                TimeSnapshot::default(),
            );
        }
        watch
    }

    /// Whether every inked pixel of `part` is inked in `whole`
    fn contains(whole: &Framebuffer, part: &Framebuffer) -> bool {
        (0..128).all(|x| (0..64).all(|y| !part.get(x, y) || whole.get(x, y)))
    }

    #[test]
    fn test_home_screen_content() {
        let watch = CasioState::default();
        let fb = frame(&watch, TimeSnapshot::default());

        let mut expected = Framebuffer::new();
        main_digits(&mut expected, " 1:58 00");
        secondary_digits(&mut expected, "20 22  4-24");
        header(&mut expected, "SUN");
        indicators::pm1(&mut expected);
        assert!(contains(&fb, &expected));
    }

    #[test]
    fn test_home_24h() {
        let mut watch = CasioState::default();
        watch.home.use_24h = true;
        let fb = frame(&watch, TimeSnapshot::default());

        let mut expected = Framebuffer::new();
        main_digits(&mut expected, "13:58 00");
        assert!(contains(&fb, &expected));

        // No PM marker
        let mut pm = Framebuffer::new();
        indicators::pm1(&mut pm);
        assert!(!contains(&fb, &pm));
    }

    #[test]
    fn test_home_weekday_follows_language() {
        let mut watch = CasioState::default();
        watch.home.language = crate::config::Language::French;
        let fb = frame(&watch, TimeSnapshot::default());

        let mut expected = Framebuffer::new();
        header(&mut expected, "DIM");
        assert!(contains(&fb, &expected));
    }

    #[test]
    fn test_home_database_overlay() {
        let mut watch = CasioState::default();
        watch.home.show_database = true;
        watch.database.label.push_str("MNO").unwrap();

        let fb = frame(&watch, TimeSnapshot::default());
        let mut label = Framebuffer::new();
        draw_text(&mut label, 25, 0, 2, "MNO");
        assert!(contains(&fb, &label));
    }

    #[test]
    fn test_overlays_do_not_recurse() {
        let mut watch = in_mode(Mode::DualTime);
        watch.dual_time.show_home = true;
        watch.home.show_dual_time = true;

        // Plain home screen
        let mut plain = CasioState::default();
        plain.home = watch.home.clone();
        plain.home.show_dual_time = false;

        assert_eq!(
            frame(&watch, TimeSnapshot::default()),
            frame(&plain, TimeSnapshot::default())
        );
    }

    #[test]
    fn test_database_intro_and_pages() {
        let mut watch = in_mode(Mode::Database);
        let intro = frame(&watch, TimeSnapshot::default());
        let mut expected = Framebuffer::new();
        main_digits(&mut expected, " F: 15");
        assert!(contains(&intro, &expected));

        watch.database.intro = 0;
        watch.database.page = 1;
        let page = frame(&watch, TimeSnapshot::default());
        let mut glyphs = Framebuffer::new();
        draw_glyph_run(&mut glyphs, 25, 0, 2, &[1, 2, 3, 4, 5, 6, 7, 8]);
        draw_glyph_run(&mut glyphs, 5, 23, 2, &[9, 10, 11, 12, 13, 14, 15, 16, 17, 18]);
        assert!(contains(&page, &glyphs));
    }

    #[test]
    fn test_last_database_page_stops_at_table_end() {
        let mut watch = in_mode(Mode::Database);
        watch.database.intro = 0;
        watch.database.page = 5;
        // Glyphs 113..=140; indices past 132 draw nothing
        let fb = frame(&watch, TimeSnapshot::default());
        let mut tail = Framebuffer::new();
        draw_glyph_run(&mut tail, 5, 45, 2, &[131, 132]);
        assert!(contains(&fb, &tail));
    }

    #[test]
    fn test_calculator_screen() {
        let mut watch = in_mode(Mode::Calculator);
        for key in [Key::Digit1, Key::Digit2, Key::A] {
            watch.process(Event::KeyPressed(key), TimeSnapshot::default());
        }
        let fb = frame(&watch, TimeSnapshot::default());

        let mut expected = Framebuffer::new();
        main_digits(&mut expected, "      12.");
        header(&mut expected, "  +");
        assert!(contains(&fb, &expected));
    }

    #[test]
    fn test_stopwatch_screen_shows_split() {
        let mut watch = in_mode(Mode::Stopwatch);
        let at = |ticks| TimeSnapshot { ticks, epoch: 0 };
        watch.process(Event::ButtonPressed(crate::device::Button::Action), at(0));
        watch.process(Event::ButtonPressed(crate::device::Button::Split), at(6150));

        let fb = frame(&watch, at(9000));
        let mut expected = Framebuffer::new();
        // 61.50 s split
        main_digits(&mut expected, " 0:01 01");
        indicators::split(&mut expected);
        assert!(contains(&fb, &expected));
    }

    #[test]
    fn test_alarm_star_lights_everything() {
        let mut watch = in_mode(Mode::Alarm);
        watch.process(Event::KeyPressed(Key::Star), TimeSnapshot::default());
        let fb = frame(&watch, TimeSnapshot::default());

        let mut expected = Framebuffer::new();
        for n in 1..=5 {
            indicators::alarm(&mut expected, n);
        }
        indicators::mute(&mut expected);
        indicators::snooze(&mut expected);
        assert!(contains(&fb, &expected));
    }

    #[test]
    fn test_dual_time_screen() {
        let watch = in_mode(Mode::DualTime);
        let fb = frame(&watch, TimeSnapshot::default());

        let mut expected = Framebuffer::new();
        // 17:28 in 12-hour display
        main_digits(&mut expected, " 5:28 00");
        header(&mut expected, "\u{05}DT");
        assert!(contains(&fb, &expected));
    }
}
