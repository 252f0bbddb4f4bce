#![allow(dead_code)]

/// Builds the stdin script for one interactive order session.
pub struct SessionScript {
    lines: Vec<String>,
}

impl SessionScript {
    pub fn customer(name: &str, phone: &str, email: &str) -> Self {
        Self {
            lines: vec![name.to_string(), phone.to_string(), email.to_string()],
        }
    }

    pub fn line(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    pub fn item(self, product_id: u32, quantity: u32) -> Self {
        self.line(&product_id.to_string())
            .line(&quantity.to_string())
    }

    /// Ends product entry and answers the fulfillment question.
    pub fn finish(self, delivery: &str) -> String {
        let mut script = self.line("0").line(delivery).lines.join("\n");
        script.push('\n');
        script
    }
}

pub fn jane() -> SessionScript {
    SessionScript::customer("Jane Doe", "5551234567", "jane@example.com")
}
