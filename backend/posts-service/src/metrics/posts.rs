use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter_vec, Histogram,
    HistogramVec, IntCounterVec,
};

lazy_static! {
    /// Post list requests by comment selection mode and outcome (ok/error).
    pub static ref POSTS_LIST_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "posts_list_requests_total",
        "Total post list requests segmented by comment mode and outcome",
        &["mode", "outcome"]
    )
    .expect("failed to register posts_list_requests_total");

    /// Time spent assembling a post list page.
    pub static ref POSTS_LIST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "posts_list_duration_seconds",
        "Post list assembly duration segmented by comment mode",
        &["mode"]
    )
    .expect("failed to register posts_list_duration_seconds");

    /// Comments rendered per page.
    pub static ref POSTS_LIST_COMMENTS_RETURNED: Histogram = register_histogram!(
        "posts_list_comments_returned",
        "Number of comments rendered on a post list page",
        vec![0.0, 3.0, 6.0, 10.0, 15.0, 20.0, 30.0]
    )
    .expect("failed to register posts_list_comments_returned");
}
