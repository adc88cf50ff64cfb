use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

pub const REGISTERED: Symbol = symbol_short!("register");

/// Published once per successful registration.
///
/// topics: `("register", student)`, data: `(name, age, course)`
pub fn student_registered(env: &Env, student: &Address, name: &String, age: u32, course: &String) {
    env.events().publish(
        (REGISTERED, student.clone()),
        (name.clone(), age, course.clone()),
    );
}
