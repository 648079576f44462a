use spdy_codec::{
    CodecError, Context, Frame, FramingError, Role, SettingEntry, SettingsFrame, WindowUpdateFrame,
};

#[test]
fn unknown_control_frame_type_is_reported() {
    let mut server = Context::new(Role::Server, 3);
    // control bit set, version 3, frame type 250 (unassigned), 0-length payload.
    let bytes = [0x80, 0x03, 0x00, 0xFA, 0x00, 0x00, 0x00, 0x00];
    server.incoming(&bytes);
    let err = server.get_frame().unwrap_err();
    assert!(matches!(
        err,
        CodecError::Framing(FramingError::UnknownType(250))
    ));
}

#[test]
fn control_frame_with_out_of_range_version_is_rejected() {
    let mut server = Context::new(Role::Server, 3);
    let bytes = [0x80, 0x07, 0x00, 0x06, 0x00, 0x00, 0x00, 0x04, 0, 0, 0, 1];
    server.incoming(&bytes);
    let err = server.get_frame().unwrap_err();
    assert!(matches!(
        err,
        CodecError::Framing(FramingError::UnsupportedVersion(7))
    ));
}

#[test]
fn window_update_is_an_invalid_frame_on_spdy_2() {
    let mut client = Context::new(Role::Client, 2);
    let err = client
        .put_frame(&Frame::WindowUpdate(WindowUpdateFrame::new(1, 1)))
        .unwrap_err();
    assert!(matches!(err, CodecError::InvalidFrame(_)));
}

#[test]
fn truncated_settings_count_is_reported_as_truncated() {
    let mut server = Context::new(Role::Server, 3);
    // SETTINGS frame claiming a 2-byte payload, too short even for the count.
    let bytes = [0x80, 0x03, 0x00, 0x04, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00];
    server.incoming(&bytes);
    let err = server.get_frame().unwrap_err();
    assert!(matches!(
        err,
        CodecError::Framing(FramingError::Truncated { frame: "SETTINGS", .. })
    ));
}

#[test]
fn a_v2_settings_frame_is_rejected_rather_than_misdecoded_by_a_v3_session() {
    // SETTINGS shares the same fixed layout in both versions (just a
    // different byte order within each entry), so without a version check
    // this would decode "successfully" with the id and id_flag swapped
    // instead of being rejected.
    let mut client = Context::new(Role::Client, 2);
    let mut server = Context::new(Role::Server, 3);
    client
        .put_frame(&Frame::Settings(SettingsFrame::new(vec![SettingEntry::new(
            spdy_codec::settings_id::MAX_CONCURRENT_STREAMS,
            0,
            100,
        )])))
        .unwrap();
    server.incoming(&client.outgoing());
    let err = server.get_frame().unwrap_err();
    assert!(matches!(
        err,
        CodecError::Framing(FramingError::VersionMismatch {
            wire: 2,
            session: 3
        })
    ));
}

#[test]
fn get_frame_needs_more_bytes_for_an_incomplete_header() {
    let mut server = Context::new(Role::Server, 3);
    server.incoming(&[0x80, 0x03]);
    assert!(server.get_frame().unwrap().is_none());
}
