use super::*;

#[test]
fn chevron_points_down_while_closed() {
    assert_eq!(chevron(false), "▼");
}

#[test]
fn chevron_points_up_while_open() {
    assert_eq!(chevron(true), "▲");
}
