use crate::sorting::Role;
use ratatui::style::Color;

pub struct Theme {
    pub text: Color,
    pub bar: Color,
    pub primary: Color,   // Red
    pub secondary: Color, // Cyan
    pub tertiary: Color,  // Yellow
}

pub const DEFAULT_THEME: Theme = Theme {
    text: Color::Reset,
    bar: Color::Indexed(244),
    primary: Color::Indexed(196),
    secondary: Color::Indexed(45),
    tertiary: Color::Indexed(226),
};

impl Theme {
    /// Bar color for a column with the given highlight role
    pub fn bar_color(&self, role: Option<Role>) -> Color {
        match role {
            Some(Role::Primary) => self.primary,
            Some(Role::Secondary) => self.secondary,
            Some(Role::Tertiary) => self.tertiary,
            None => self.bar,
        }
    }
}
