use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded shared storage. Every handle cloned from the same
/// `Shared` reads and writes the same contents.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// True when both handles point at the same allocation.
pub fn same_storage<T: ?Sized>(a: &Shared<T>, b: &Shared<T>) -> bool {
    Rc::ptr_eq(a, b)
}
