// Pattern Catalog: runnable demonstrations of the classic design patterns.
// Every pattern lives in its own module and computes its trace as strings;
// the binaries under src/bin wire up one scenario each and print it.

pub mod trace;

pub mod behavioral {
    //! Behavioral patterns: how role objects talk to each other.
    //!
    //! Run individual scenarios with:
    //! ```bash
    //! cargo run --bin p01_chain_of_responsibility
    //! cargo run --bin p02_command
    //! cargo run --bin p03_memento
    //! cargo run --bin p04_observer
    //! cargo run --bin p05_strategy
    //! cargo run --bin p06_template_method
    //! cargo run --bin p07_visitor
    //! ```
    pub mod chain;
    pub mod command;
    pub mod memento;
    pub mod observer;
    pub mod strategy;
    pub mod template;
    pub mod visitor;
}

pub mod creational {
    //! Creational patterns: who constructs what, and when.
    //!
    //! Run individual scenarios with:
    //! ```bash
    //! cargo run --bin p08_abstract_factory
    //! cargo run --bin p09_factory_method
    //! cargo run --bin p10_prototype
    //! cargo run --bin p11_singleton
    //! ```
    pub mod abstract_factory;
    pub mod factory_method;
    pub mod prototype;
    pub mod singleton;
}

pub mod structural {
    //! Structural patterns: how objects are wired together.
    //!
    //! Run individual scenarios with:
    //! ```bash
    //! cargo run --bin p12_bridge
    //! cargo run --bin p13_composite
    //! cargo run --bin p14_decorator
    //! cargo run --bin p15_proxy
    //! ```
    pub mod bridge;
    pub mod composite;
    pub mod decorator;
    pub mod proxy;
}
