pub struct Printer {
    pub use_color: bool,
}

impl Printer {
    pub fn new() -> Self {
        // Simple color detection
        #[cfg(windows)]
        let use_color = false;

        #[cfg(not(windows))]
        let use_color = std::env::var("TERM")
            .map(|term| term != "dumb")
            .unwrap_or(false);

        Self { use_color }
    }

    pub fn success(&self, message: &str) {
        self.print_prefix("[+]", "green", message);
    }

    pub fn error(&self, message: &str) {
        self.print_prefix("[-]", "red", message);
    }

    pub fn info(&self, message: &str) {
        self.print_prefix("[?]", "cyan", message);
    }

    pub fn header(&self, title: &str) {
        if self.use_color {
            println!("\n\x1b[1;36m{}\x1b[0m", title);
            println!("\x1b[90m{}\x1b[0m", "─".repeat(title.len()));
        } else {
            println!("\n{}", title);
            println!("{}", "─".repeat(title.len()));
        }
    }

    pub fn subheader(&self, title: &str) {
        println!();
        if self.use_color {
            println!("\n\x1b[1m{}\x1b[0m", title);
        } else {
            println!("\n{}", title);
        }
    }

    pub fn print_prefix(&self, prefix: &str, color: &str, message: &str) {
        println!();
        if self.use_color {
            let color_code = match color {
                "green" => "\x1b[32m",
                "red" => "\x1b[31m",
                "cyan" => "\x1b[36m",
                _ => "\x1b[0m",
            };
            println!("{}{}\x1b[0m {}", color_code, prefix, message);
        } else {
            println!("{} {}", prefix, message);
        }
    }

    pub fn print_key_value(&self, key: &str, value: &str, indent: usize) {
        let indent_str = " ".repeat(indent);
        if self.use_color {
            println!("{}\x1b[1m{}:\x1b[0m {}", indent_str, key, value);
        } else {
            println!("{}{}: {}", indent_str, key, value);
        }
    }
}
