use proptest::prelude::*;
use spdy_codec::{Context, DataFrame, Frame, PingFrame, Role};

proptest! {
    /// Property 2: a DATA frame round-trips for any payload length, and the
    /// 24-bit length field always matches the number of payload bytes that
    /// actually follow it.
    #[test]
    fn data_frame_round_trips_for_arbitrary_payloads(
        stream_id in 1u32..=0x7FFF_FFFF,
        payload in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut client = Context::new(Role::Client, 3);
        let mut server = Context::new(Role::Server, 3);
        client.put_frame(&Frame::Data(DataFrame::new(stream_id, payload.clone()))).unwrap();
        let bytes = client.outgoing();
        let declared_len = u32::from_be_bytes([0, bytes[5], bytes[6], bytes[7]]) as usize;
        prop_assert_eq!(declared_len, bytes.len() - 8);

        server.incoming(&bytes);
        let decoded = server.get_frame().unwrap().unwrap();
        match decoded {
            Frame::Data(f) => {
                prop_assert_eq!(f.stream_id, stream_id);
                prop_assert_eq!(f.data, payload);
            }
            _ => prop_assert!(false, "expected Data"),
        }
    }

    /// Property 3: a context's allocated ids always keep the parity fixed
    /// by its role, no matter how many are drawn.
    #[test]
    fn allocated_stream_ids_preserve_role_parity(draws in 1usize..50) {
        let mut client = Context::new(Role::Client, 3);
        let mut server = Context::new(Role::Server, 3);
        for _ in 0..draws {
            prop_assert_eq!(client.allocate_stream_id() % 2, 1);
            prop_assert_eq!(server.allocate_stream_id() % 2, 0);
        }
    }

    /// Property 6: a decoder must ignore the value of reserved bits. Here
    /// the single reserved bit ahead of a PING's 32-bit payload doesn't
    /// exist on the wire (PING has no reserved bit), so instead we flip the
    /// reserved control-frame bit patterns inside a GOAWAY's leading
    /// reserved bit and confirm the decoded value is unaffected.
    #[test]
    fn reserved_bit_set_to_one_does_not_change_the_decoded_stream_id(
        last_stream_id in 0u32..0x7FFF_FFFF,
    ) {
        let mut server = Context::new(Role::Server, 2);
        let mut bytes = vec![0x80, 0x02, 0x00, 0x07, 0x00, 0x00, 0x00, 0x04];
        let mut field = last_stream_id.to_be_bytes();
        field[0] |= 0x80; // set the reserved top bit to 1 instead of 0
        bytes.extend_from_slice(&field);

        server.incoming(&bytes);
        let decoded = server.get_frame().unwrap().unwrap();
        match decoded {
            Frame::Goaway(f) => prop_assert_eq!(f.last_stream_id, last_stream_id),
            _ => prop_assert!(false, "expected Goaway"),
        }
    }
}

#[test]
fn ping_uniq_id_round_trips_full_u32_range_edges() {
    for id in [0u32, 1, 2, u32::MAX] {
        let mut client = Context::new(Role::Client, 3);
        let mut server = Context::new(Role::Server, 3);
        client.put_frame(&Frame::Ping(PingFrame::new(id))).unwrap();
        server.incoming(&client.outgoing());
        match server.get_frame().unwrap().unwrap() {
            Frame::Ping(p) => assert_eq!(p.uniq_id, id),
            _ => panic!("expected Ping"),
        }
    }
}
