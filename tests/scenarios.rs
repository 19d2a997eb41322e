//! End-to-end scenarios through the public API.

use std::cell::{Cell, RefCell};
use tether::fsm::{BuildError, TransitionHistory};
use tether::{
    ArithmeticError, Deferred, LabeledState, ObservableCell, StateMachine, StateMachineBuilder,
};

#[derive(Debug, PartialEq)]
enum OrderError {
    PaymentDeclined,
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("payment declined")
    }
}

impl std::error::Error for OrderError {}

#[test]
fn deferred_sum_and_product() {
    let a = Deferred::new(|| 10);
    let b = Deferred::new(|| 20);

    let sum = &a + &b;
    let product = &a * &b;

    assert_eq!(sum.eval(), Ok(30));
    assert_eq!(product.eval(), Ok(200));
}

#[test]
fn deferred_late_binding() {
    let x = Cell::new(5);
    let x_eval = Deferred::new(|| x.get() * 2);
    x.set(10);
    assert_eq!(x_eval.eval(), Ok(20));
}

#[test]
fn deferred_then_chain() {
    let chain = Deferred::new(|| 10 + 20).then(|result| result * 2);
    assert_eq!(chain.eval(), Ok(60));
}

#[test]
fn division_by_zero_in_both_components() {
    let cell = ObservableCell::new(10);
    assert!(matches!(
        cell.checked_div(0),
        Err(ArithmeticError::DivisionByZero)
    ));
    assert_eq!(*cell.get(), 10);

    let quotient = Deferred::new(|| 10) / Deferred::new(|| 0);
    assert_eq!(quotient.eval(), Err(ArithmeticError::DivisionByZero));
    assert_eq!(quotient.eval(), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn cell_drives_deferred_expression() {
    let price = RefCell::new(ObservableCell::new(100));
    let quantity = Cell::new(3);
    let total = Deferred::new(|| *price.borrow().get() * quantity.get());

    assert_eq!(total.eval(), Ok(300));

    price.borrow_mut().set(120).unwrap();
    quantity.set(2);
    assert_eq!(total.eval(), Ok(240));
}

#[test]
fn order_workflow_with_failing_payment() {
    let log = RefCell::new(Vec::new());
    let approve = Cell::new(false);

    let cart: LabeledState<'_, OrderError> = LabeledState::fallible("Cart", || {
        log.borrow_mut().push("enter Cart".to_string());
        Ok(())
    });
    let paid = LabeledState::fallible("Paid", || {
        log.borrow_mut().push("enter Paid".to_string());
        Ok(())
    });
    let shipped = LabeledState::passive("Shipped");

    let mut machine = StateMachineBuilder::new()
        .initial(cart.clone())
        .fallible_transition(&cart, &paid, || {
            if approve.get() {
                Ok(())
            } else {
                Err(OrderError::PaymentDeclined)
            }
        })
        .transition(&paid, &shipped, || log.borrow_mut().push("ship".to_string()))
        .build()
        .unwrap();

    let err = machine.transition_to(&paid).unwrap_err();
    assert_eq!(err, OrderError::PaymentDeclined);
    assert_eq!(machine.current_name(), "Cart");

    approve.set(true);
    machine
        .transition_to(&paid)
        .and_then(|m| m.transition_to(&shipped))
        .unwrap();

    assert_eq!(machine.current_name(), "Shipped");
    assert_eq!(machine.history().path(), vec!["Cart", "Paid", "Shipped"]);
    assert_eq!(
        *log.borrow(),
        vec!["enter Cart", "enter Paid", "ship"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    );
}

#[test]
fn build_error_exposes_source() {
    let broken: LabeledState<'_, OrderError> =
        LabeledState::fallible("Checkout", || Err(OrderError::PaymentDeclined));

    let err = StateMachineBuilder::new()
        .initial(broken)
        .build()
        .map(|_| ())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Entry action of initial state 'Checkout' failed"
    );
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "payment declined");
    assert!(matches!(err, BuildError::EntryFailed { .. }));
}

#[test]
fn history_can_be_exported() {
    let a = LabeledState::new("A", || {});
    let b = LabeledState::new("B", || {});

    let mut machine = StateMachine::new(a.clone()).unwrap();
    machine.add_transition(&a, &b, || {});
    machine.transition_to(&b).unwrap().transition_to(&a).unwrap();

    let json = serde_json::to_value(machine.history()).unwrap();
    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["from"], "A");
    assert_eq!(records[0]["action_ran"], true);
    assert_eq!(records[1]["action_ran"], false);

    let restored: TransitionHistory = serde_json::from_value(json).unwrap();
    assert_eq!(restored.path(), vec!["A", "B", "A"]);
}
