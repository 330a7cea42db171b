use voxtract::{Context, DateTimeDetails, DurationValue, NumberMatch, Phases, Resolution};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, s: impl AsRef<str>, code: &str) -> String {
            if self.enabled { format!("{code}{}{RESET}", s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s, color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s, DIM)
        }
    }
}

const PHASE_NAMES: &[(Phases, &str)] = &[
    (Phases::NOW, "now"),
    (Phases::OFFSET, "offset"),
    (Phases::ANCHOR, "anchor"),
    (Phases::WEEKDAY, "weekday"),
    (Phases::NAMED_DAY, "named day"),
    (Phases::CALENDAR, "calendar"),
    (Phases::CLOCK, "clock"),
    (Phases::PINNED, "pinned"),
];

/// Human-readable CLI output.
pub struct Report {
    palette: ansi::Palette,
}

impl Report {
    pub fn new(color: bool) -> Self {
        Self { palette: ansi::Palette::new(color) }
    }

    fn header(&self, verb: &str, input: &str) {
        let p = &self.palette;
        println!("\n{}", p.bold(p.paint(format!("⚙  {verb}: \"{}\"", input.trim()), ansi::CYAN)));
    }

    fn section(&self, title: &str) {
        println!("\n{}", self.palette.paint(format!("━━━ {title} ━━━"), ansi::GRAY));
    }

    pub fn numbers(&self, input: &str, matches: &[NumberMatch]) {
        let p = &self.palette;
        self.header("Numbers", input);
        self.section("Results");
        if matches.is_empty() {
            println!("{}", p.dim("  No number found"));
        }
        for (idx, m) in matches.iter().enumerate() {
            println!(
                "  {} {} {} {} {}",
                p.paint(format!("[{idx}]"), ansi::GRAY),
                p.bold(p.paint(m.value.to_string(), ansi::GREEN)),
                p.dim("│"),
                p.paint(format!("span {}..{}", m.span.start, m.span.end), ansi::YELLOW),
                p.dim(format!("\"{}\"", m.text)),
            );
        }
        println!();
    }

    pub fn duration(&self, input: &str, resolution: Resolution, value: &DurationValue, leftover: &str) {
        let p = &self.palette;
        self.header("Duration", input);
        self.section("Result");
        println!("  {} {}", p.paint("value:", ansi::BLUE), p.bold(p.paint(value.to_string(), ansi::GREEN)));
        println!("  {} {}", p.paint("resolution:", ansi::BLUE), p.dim(resolution.to_string()));
        println!("  {} {}", p.paint("leftover:", ansi::BLUE), p.paint(format!("\"{leftover}\""), ansi::YELLOW));
        println!();
    }

    pub fn datetime(&self, input: &str, context: &Context, details: &DateTimeDetails) {
        let p = &self.palette;
        self.header("Datetime", input);
        println!("  {} {}", p.dim("reference:"), p.dim(context.reference_time.to_string()));

        self.section("Phases");
        let fired: Vec<&str> =
            PHASE_NAMES.iter().filter(|(flag, _)| details.phases.contains(*flag)).map(|(_, name)| *name).collect();
        if fired.is_empty() {
            println!("{}", p.dim("  None fired"));
        } else {
            println!("  {}", p.paint(fired.join(" → "), ansi::BLUE));
        }
        let words: Vec<String> = details
            .words
            .iter()
            .map(|w| if details.consumed.contains(w) { p.paint(w, ansi::YELLOW) } else { p.dim(w) })
            .collect();
        println!("  {} {}", p.dim("words:"), words.join(" "));

        self.section("Result");
        match &details.value {
            Some((moment, leftover)) => {
                println!("  {} {}", p.paint("moment:", ansi::BLUE), p.bold(p.paint(moment.to_string(), ansi::GREEN)));
                println!("  {} {}", p.paint("leftover:", ansi::BLUE), p.paint(format!("\"{leftover}\""), ansi::YELLOW));
            }
            None => println!("{}", p.dim("  No date or time found")),
        }

        self.section("Timing");
        println!("  Total: {}", p.paint(format!("{:?}", details.elapsed), ansi::GREEN));
        println!();
    }

    pub fn normalized(&self, input: &str, output: &str) {
        let p = &self.palette;
        self.header("Normalize", input);
        println!("  {}", p.bold(p.paint(output, ansi::GREEN)));
        println!();
    }
}
