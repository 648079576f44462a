use spdy_codec::{
    Context, DataFrame, Frame, GoawayFrame, HeaderField, HeadersFrame, PingFrame, Role,
    RstStreamFrame, SettingEntry, SettingsFrame, SynReplyFrame, SynStreamFrame, WindowUpdateFrame,
};

fn pair(version: u8) -> (Context, Context) {
    (Context::new(Role::Client, version), Context::new(Role::Server, version))
}

fn send(client: &mut Context, server: &mut Context, frame: Frame) -> Frame {
    client.put_frame(&frame).unwrap();
    server.incoming(&client.outgoing());
    server.get_frame().unwrap().expect("a complete frame")
}

#[test]
fn syn_stream_round_trips_v2_and_v3() {
    for version in [2u8, 3u8] {
        let (mut client, mut server) = pair(version);
        let stream_id = client.allocate_stream_id();
        let headers = vec![
            HeaderField::new(":method", "GET"),
            HeaderField::new(":path", "/index.html"),
            HeaderField::new(":host", "example.com"),
        ];
        let mut frame = SynStreamFrame::new(stream_id, headers.clone());
        frame.priority = 1;
        let decoded = send(&mut client, &mut server, Frame::SynStream(frame));
        match decoded {
            Frame::SynStream(f) => {
                assert_eq!(f.stream_id, stream_id);
                assert_eq!(f.priority, 1);
                assert_eq!(f.headers, headers);
            }
            _ => panic!("expected SynStream on version {version}"),
        }
    }
}

#[test]
fn syn_reply_round_trips_v2_and_v3() {
    for version in [2u8, 3u8] {
        let (mut client, mut server) = pair(version);
        let headers = vec![HeaderField::new(":status", "200 OK")];
        let decoded = send(
            &mut client,
            &mut server,
            Frame::SynReply(SynReplyFrame::new(1, headers.clone())),
        );
        match decoded {
            Frame::SynReply(f) => assert_eq!(f.headers, headers),
            _ => panic!("expected SynReply on version {version}"),
        }
    }
}

#[test]
fn rst_stream_round_trips() {
    let (mut client, mut server) = pair(3);
    let decoded = send(
        &mut client,
        &mut server,
        Frame::RstStream(RstStreamFrame::new(1, spdy_codec::error_code::CANCEL)),
    );
    match decoded {
        Frame::RstStream(f) => {
            assert_eq!(f.stream_id, 1);
            assert_eq!(f.error_code, spdy_codec::error_code::CANCEL);
        }
        _ => panic!("expected RstStream"),
    }
}

#[test]
fn settings_round_trips_v2_and_v3_with_different_byte_order() {
    for version in [2u8, 3u8] {
        let (mut client, mut server) = pair(version);
        let entries = vec![
            SettingEntry::new(spdy_codec::settings_id::MAX_CONCURRENT_STREAMS, 0, 100),
            SettingEntry::new(spdy_codec::settings_id::INITIAL_WINDOW_SIZE, 0, 65536),
        ];
        let decoded = send(
            &mut client,
            &mut server,
            Frame::Settings(SettingsFrame::new(entries.clone())),
        );
        match decoded {
            Frame::Settings(f) => assert_eq!(f.entries, entries),
            _ => panic!("expected Settings on version {version}"),
        }
    }
}

#[test]
fn ping_round_trips_and_ids_follow_sender_parity() {
    let (mut client, mut server) = pair(3);
    let id = client.allocate_ping_id();
    let decoded = send(&mut client, &mut server, Frame::Ping(PingFrame::new(id)));
    match decoded {
        Frame::Ping(p) => assert_eq!(p.uniq_id % 2, 1), // client ids are odd
        _ => panic!("expected Ping"),
    }
}

#[test]
fn goaway_round_trips_with_status_in_v3_and_without_in_v2() {
    let (mut client, mut server) = pair(2);
    let decoded = send(&mut client, &mut server, Frame::Goaway(GoawayFrame::without_status(9)));
    match decoded {
        Frame::Goaway(f) => {
            assert_eq!(f.last_stream_id, 9);
            assert_eq!(f.status_code, None);
        }
        _ => panic!("expected Goaway"),
    }

    let (mut client, mut server) = pair(3);
    let decoded = send(
        &mut client,
        &mut server,
        Frame::Goaway(GoawayFrame::new(9, spdy_codec::goaway_status::PROTOCOL_ERROR)),
    );
    match decoded {
        Frame::Goaway(f) => {
            assert_eq!(f.last_stream_id, 9);
            assert_eq!(f.status_code, Some(spdy_codec::goaway_status::PROTOCOL_ERROR));
        }
        _ => panic!("expected Goaway"),
    }
}

#[test]
fn headers_frame_round_trips_v2_and_v3() {
    for version in [2u8, 3u8] {
        let (mut client, mut server) = pair(version);
        let headers = vec![HeaderField::new("x-trailer", "done")];
        let decoded = send(
            &mut client,
            &mut server,
            Frame::Headers(HeadersFrame::new(1, headers.clone())),
        );
        match decoded {
            Frame::Headers(f) => assert_eq!(f.headers, headers),
            _ => panic!("expected Headers on version {version}"),
        }
    }
}

#[test]
fn window_update_round_trips_on_v3() {
    let (mut client, mut server) = pair(3);
    let decoded = send(
        &mut client,
        &mut server,
        Frame::WindowUpdate(WindowUpdateFrame::new(1, 4096)),
    );
    match decoded {
        Frame::WindowUpdate(f) => assert_eq!(f.delta_window_size, 4096),
        _ => panic!("expected WindowUpdate"),
    }
}

#[test]
fn data_frame_round_trips_with_fin_flag() {
    let (mut client, mut server) = pair(3);
    let mut frame = DataFrame::new(1, b"payload".to_vec());
    assert!(frame.fin());
    frame.flags = 0;
    let decoded = send(&mut client, &mut server, Frame::Data(frame));
    match decoded {
        Frame::Data(f) => {
            assert_eq!(f.data, b"payload".to_vec());
            assert!(!f.fin());
        }
        _ => panic!("expected Data"),
    }
}

#[test]
fn interleaved_header_bearing_frames_stay_in_sync_on_one_context() {
    let (mut client, mut server) = pair(3);
    let a = client.allocate_stream_id();
    let b = client.allocate_stream_id();

    client
        .put_frame(&Frame::SynStream(SynStreamFrame::new(
            a,
            vec![HeaderField::new(":path", "/a")],
        )))
        .unwrap();
    client
        .put_frame(&Frame::SynStream(SynStreamFrame::new(
            b,
            vec![HeaderField::new(":path", "/b")],
        )))
        .unwrap();
    server.incoming(&client.outgoing());

    let first = server.get_frame().unwrap().unwrap();
    let second = server.get_frame().unwrap().unwrap();
    assert!(server.get_frame().unwrap().is_none());

    match (first, second) {
        (Frame::SynStream(f1), Frame::SynStream(f2)) => {
            assert_eq!(f1.stream_id, a);
            assert_eq!(f2.stream_id, b);
            assert_eq!(f1.headers[0].value, b"/a".to_vec());
            assert_eq!(f2.headers[0].value, b"/b".to_vec());
        }
        _ => panic!("expected two SynStream frames"),
    }
}
