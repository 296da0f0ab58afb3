use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: schedules created.
pub const SCHEDULES_CREATED_TOTAL: &str = "slotlink_schedules_created_total";

/// Counter: slots booked.
pub const BOOKINGS_TOTAL: &str = "slotlink_bookings_total";

/// Counter: booking attempts that found the slot already taken (lost a
/// race or arrived via a stale view).
pub const BOOKING_CONFLICTS_TOTAL: &str = "slotlink_booking_conflicts_total";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: schedules currently held in the store.
pub const SCHEDULES_ACTIVE: &str = "slotlink_schedules_active";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
