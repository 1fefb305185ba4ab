use porter_stem::{StageTrace, StemResultVerbose, cv};

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

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &StemResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let shape = cv(&res.word);
    println!(
        "\n{}  {}",
        palette.bold(palette.paint(format!("⚙  Stemming: \"{}\"", res.word), ansi::CYAN)),
        palette.dim(format!("{} m={}", shape, shape.measure())),
    );

    println!("\n{}", palette.paint("━━━ Stages ━━━", ansi::GRAY));
    if res.details.bypassed {
        println!("{}", palette.dim("  Word has two characters or fewer; no stage ran"));
    } else {
        for stage in &res.details.stages {
            println!("  {}", fmt_stage(stage, &palette));
        }
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    let fired: Vec<&str> = res.details.fired.steps().iter().map(|s| s.name()).collect();
    println!(
        "  {} {} {}",
        palette.bold(palette.paint(&res.stem, ansi::GREEN)),
        palette.dim("│ fired:"),
        if fired.is_empty() { palette.dim("none") } else { palette.paint(fired.join(", "), ansi::BLUE) },
    );
    println!("  {} {}", palette.dim("Total:"), palette.paint(format!("{:?}", res.details.total), ansi::GREEN));
    println!();
}

fn fmt_stage(stage: &StageTrace, palette: &ansi::Palette) -> String {
    let label = palette.paint(format!("{:<3}", stage.step.name()), ansi::BLUE);

    if !stage.changed() {
        let note = match stage.rule {
            Some(rule) => format!("= {}  (rule {rule}, no change)", stage.output),
            None => format!("= {}", stage.output),
        };
        return format!("{} {}", label, palette.dim(note));
    }

    let rule = match (stage.rule, stage.extra) {
        (Some(rule), Some(extra)) => format!("{rule} → {extra}"),
        (Some(rule), None) => rule.to_string(),
        (None, _) => String::new(),
    };

    format!(
        "{} {} {} {}  {}",
        label,
        palette.dim(&stage.input),
        palette.dim("→"),
        palette.bold(palette.paint(&stage.output, ansi::YELLOW)),
        palette.paint(rule, ansi::CYAN),
    )
}
