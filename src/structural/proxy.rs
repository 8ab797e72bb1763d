//! Proxy: stands in for the real subject behind the same interface, adding
//! an access check and logging around the delegated call.

pub trait Subject {
    fn request(&self) -> Vec<String>;
}

pub struct RealSubject;

impl Subject for RealSubject {
    fn request(&self) -> Vec<String> {
        vec!["RealSubject: Handling request.".to_string()]
    }
}

/// Owns its copy of the real subject and forwards only when the access
/// check passes.
pub struct Proxy {
    real_subject: RealSubject,
    access_granted: bool,
}

impl Proxy {
    pub fn new(real_subject: RealSubject) -> Self {
        Self {
            real_subject,
            access_granted: true,
        }
    }

    pub fn with_access(real_subject: RealSubject, access_granted: bool) -> Self {
        Self {
            real_subject,
            access_granted,
        }
    }

    fn check_access(&self) -> bool {
        self.access_granted
    }
}

impl Subject for Proxy {
    fn request(&self) -> Vec<String> {
        let mut lines =
            vec!["Proxy: Checking access prior to firing a real request.".to_string()];
        if self.check_access() {
            lines.extend(self.real_subject.request());
            lines.push("Proxy: Logging the time of request.".to_string());
        } else {
            lines.push("Proxy: Access denied, the real subject stays untouched.".to_string());
        }
        lines
    }
}
