//! Abstract Factory: a factory hands out a whole family of widgets that are
//! guaranteed to match each other.

pub trait Button {
    fn render(&self) -> String;
}

pub trait Checkbox {
    fn render(&self) -> String;

    /// Collaboration inside the family: a checkbox aligns itself with a
    /// button built by the same factory.
    fn paired_with(&self, button: &dyn Button) -> String;
}

pub struct WindowsButton;

impl Button for WindowsButton {
    fn render(&self) -> String {
        "a Windows button".to_string()
    }
}

pub struct MacButton;

impl Button for MacButton {
    fn render(&self) -> String {
        "a Mac button".to_string()
    }
}

pub struct WindowsCheckbox;

impl Checkbox for WindowsCheckbox {
    fn render(&self) -> String {
        "Rendering a Windows checkbox".to_string()
    }

    fn paired_with(&self, button: &dyn Button) -> String {
        format!("Windows checkbox aligned with ({})", button.render())
    }
}

pub struct MacCheckbox;

impl Checkbox for MacCheckbox {
    fn render(&self) -> String {
        "Rendering a Mac checkbox".to_string()
    }

    fn paired_with(&self, button: &dyn Button) -> String {
        format!("Mac checkbox aligned with ({})", button.render())
    }
}

/// Every factory returns a mutually compatible button/checkbox pair.
pub trait WidgetFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct WindowsFactory;

impl WidgetFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

pub struct MacFactory;

impl WidgetFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

/// The client only ever sees the factory interface, so it works with any
/// family.
pub fn render_ui(factory: &dyn WidgetFactory) -> Vec<String> {
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();
    vec![checkbox.render(), checkbox.paired_with(button.as_ref())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_family_is_consistent() {
        let lines = render_ui(&WindowsFactory);
        assert_eq!(lines[0], "Rendering a Windows checkbox");
        assert_eq!(lines[1], "Windows checkbox aligned with (a Windows button)");
    }

    #[test]
    fn mac_family_is_consistent() {
        let lines = render_ui(&MacFactory);
        assert!(lines.iter().all(|l| l.contains("Mac")));
        assert!(lines.iter().all(|l| !l.contains("Windows")));
    }

    #[test]
    fn products_collaborate_across_the_family_boundary() {
        let factory = MacFactory;
        let checkbox = factory.create_checkbox();
        let button = factory.create_button();
        assert_eq!(
            checkbox.paired_with(button.as_ref()),
            "Mac checkbox aligned with (a Mac button)"
        );
    }
}
