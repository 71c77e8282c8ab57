use serde::Serialize;

/// Restaurant details shown in the header, contact section, and footer.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSettings {
    /// When false the storefront falls back to pay-on-pickup ordering.
    pub qr_payment_enabled: bool,
    pub restaurant_name: String,
    pub phone: String,
    pub address: String,
    pub hours: String,
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self {
            qr_payment_enabled: true,
            restaurant_name: "Kebab Express".to_string(),
            phone: "+48 123 456 789".to_string(),
            address: "ul. Główna 123, 00-001 Warszawa".to_string(),
            hours: "10:00 - 22:00".to_string(),
        }
    }
}
