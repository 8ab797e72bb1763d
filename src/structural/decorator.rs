//! Decorator: wrappers share the component's interface and nest to any
//! depth, each layer adding its own marker around the delegate's result.

pub trait Component {
    fn operation(&self) -> String;
}

pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

pub struct ConcreteDecoratorA {
    wrapped: Box<dyn Component>,
}

impl ConcreteDecoratorA {
    pub fn new(wrapped: Box<dyn Component>) -> Self {
        Self { wrapped }
    }

    /// Peels this layer off, handing back whatever it wrapped.
    pub fn into_inner(self) -> Box<dyn Component> {
        self.wrapped
    }
}

impl Component for ConcreteDecoratorA {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorA({})", self.wrapped.operation())
    }
}

pub struct ConcreteDecoratorB {
    wrapped: Box<dyn Component>,
}

impl ConcreteDecoratorB {
    pub fn new(wrapped: Box<dyn Component>) -> Self {
        Self { wrapped }
    }

    pub fn into_inner(self) -> Box<dyn Component> {
        self.wrapped
    }
}

impl Component for ConcreteDecoratorB {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorB({})", self.wrapped.operation())
    }
}
