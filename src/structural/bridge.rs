//! Bridge: controllers and platforms vary independently; a controller only
//! ever talks to its platform through the implementation interface.

/// The implementation hierarchy.
pub trait Platform {
    fn render(&self) -> String;
}

pub struct PlatformA;

impl Platform for PlatformA {
    fn render(&self) -> String {
        "PlatformA: Here's the result on platform A.".to_string()
    }
}

pub struct PlatformB;

impl Platform for PlatformB {
    fn render(&self) -> String {
        "PlatformB: Here's the result on platform B.".to_string()
    }
}

/// The abstraction hierarchy. Either side of the bridge can grow without
/// touching the other.
pub trait Remote {
    fn operate(&self) -> String;
}

pub struct Controller {
    platform: Box<dyn Platform>,
}

impl Controller {
    pub fn new(platform: Box<dyn Platform>) -> Self {
        Self { platform }
    }
}

impl Remote for Controller {
    fn operate(&self) -> String {
        format!("Controller: Base operation with:\n{}", self.platform.render())
    }
}

pub struct ExtendedController {
    platform: Box<dyn Platform>,
}

impl ExtendedController {
    pub fn new(platform: Box<dyn Platform>) -> Self {
        Self { platform }
    }
}

impl Remote for ExtendedController {
    fn operate(&self) -> String {
        format!(
            "ExtendedController: Extended operation with:\n{}",
            self.platform.render()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_delegates_to_its_platform() {
        let remote = Controller::new(Box::new(PlatformA));
        assert_eq!(
            remote.operate(),
            "Controller: Base operation with:\nPlatformA: Here's the result on platform A."
        );
    }

    #[test]
    fn either_hierarchy_swaps_independently() {
        // Same abstraction over a different platform.
        let base_on_b = Controller::new(Box::new(PlatformB));
        assert!(base_on_b.operate().contains("platform B"));

        // Different abstraction over the same platform.
        let extended_on_b = ExtendedController::new(Box::new(PlatformB));
        assert!(extended_on_b.operate().starts_with("ExtendedController:"));
        assert!(extended_on_b.operate().contains("platform B"));
    }

    #[test]
    fn client_sees_only_the_remote_interface() {
        let remotes: Vec<Box<dyn Remote>> = vec![
            Box::new(Controller::new(Box::new(PlatformA))),
            Box::new(ExtendedController::new(Box::new(PlatformB))),
        ];
        let lines: Vec<String> = remotes.iter().map(|r| r.operate()).collect();
        assert_eq!(lines.len(), 2);
    }
}
