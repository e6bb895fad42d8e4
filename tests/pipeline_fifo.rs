//! Property 9: two requests enqueued in order into the same Active
//! Object produce responses in the same order.

use std::sync::{Arc, Mutex};

use graphd::concurrency::ActiveObject;

#[test]
fn active_object_preserves_fifo_order_under_concurrent_producers() {
    let results = Arc::new(Mutex::new(Vec::new()));
    let worker_results = Arc::clone(&results);
    let mut ao = ActiveObject::spawn("fifo-test", move |item: u32| {
        worker_results.lock().unwrap().push(item);
    });

    // Two "requests" submitted in order from the same producer thread must
    // come out in the same order, even though the AO's own thread runs
    // concurrently with the sender.
    for i in 0..100 {
        ao.send(i);
    }
    ao.close();
    ao.join();

    let seen = results.lock().unwrap();
    let expected: Vec<u32> = (0..100).collect();
    assert_eq!(*seen, expected);
}
