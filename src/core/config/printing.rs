use crate::core::config::data::Config;

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.webhook_url {
            Some(url) => println!("  webhook-url: {url}"),
            None => println!("  webhook-url: (unset, using {})", self.webhook_url()),
        }
        match self.dark_mode {
            Some(true) => println!("  dark-mode: on"),
            Some(false) => println!("  dark-mode: off"),
            None => println!("  dark-mode: (unset, on)"),
        }
    }
}
