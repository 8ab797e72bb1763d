//! Composite scenario: the client treats a lone leaf and a whole tree
//! through the same operation.
//!
//! Run with: cargo run --bin p13_composite

use pattern_catalog::structural::composite::Node;
use pattern_catalog::trace;

fn client_code(component: &Node) {
    trace::line(&format!("Result: {}", component.operation()));
}

fn main() {
    trace::banner("Composite");

    let simple = Node::leaf("Leaf");
    trace::note("Client: I have got a simple component:");
    client_code(&simple);
    trace::blank();

    let mut branch1 = Node::branch();
    branch1.add(Node::leaf("Leaf"));
    branch1.add(Node::leaf("Leaf"));
    let mut branch2 = Node::branch();
    branch2.add(Node::leaf("Leaf"));
    let mut tree = Node::branch();
    tree.add(branch1);
    tree.add(branch2);

    trace::note("Client: Now I've got a composite tree:");
    client_code(&tree);
}
