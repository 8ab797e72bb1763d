//! Factory Method: a creator's shared planning code consumes whatever
//! product its overridable creation method decides to build.

pub trait Transport {
    fn deliver(&self) -> String;
}

pub struct Truck;

impl Transport for Truck {
    fn deliver(&self) -> String {
        "Truck: delivering cargo by land in a box".to_string()
    }
}

pub struct Ship;

impl Transport for Ship {
    fn deliver(&self) -> String {
        "Ship: delivering cargo by sea in a container".to_string()
    }
}

/// The creator. `plan_delivery` is shared by every variant and works with
/// the product purely through the `Transport` interface.
pub trait Logistics {
    fn create_transport(&self) -> Box<dyn Transport>;

    fn plan_delivery(&self) -> String {
        let transport = self.create_transport();
        format!(
            "Logistics: the same planning code ran, and then: {}",
            transport.deliver()
        )
    }
}

pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}
