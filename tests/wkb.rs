use geokit::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, PolyhedralSurface, Tin, Triangle,
};
use geokit::io::wkb::{
    decode_hex, from_wkb, Endianness, WkbDialect, WkbOptions, WkbTransformer,
};
use geokit::GeokitError;

fn ring(start: f64) -> LinearRing {
    LinearRing::closed(
        (0..4)
            .map(|i| {
                let x = start + 2. * i as f64;
                Point::new(x, x + 1.)
            })
            .collect(),
    )
}

fn polygon(start: f64) -> Polygon {
    Polygon::new(ring(start), vec![ring(start + 8.)])
}

fn line(coords: &[(f64, f64)]) -> LineString {
    LineString::new(coords.iter().map(|&c| Point::from(c)).collect())
}

/// Geometries with their expected EWKB (SRID 4326) encoding, as PostGIS prints it.
fn ewkb_fixtures() -> Vec<(Geometry, &'static str)> {
    vec![
        (
            Geometry::Point(Point::new(1., 1.)),
            "0101000020E6100000000000000000F03F000000000000F03F",
        ),
        (
            Geometry::MultiPoint(MultiPoint::new(vec![Point::new(1., 2.), Point::new(3., 4.)])),
            "0104000020E6100000020000000101000000000000000000F03F0000000000000040010100000000000000000008400000000000001040",
        ),
        (
            Geometry::LineString(line(&[(1., 2.), (3., 4.)])),
            "0102000020E610000002000000000000000000F03F000000000000004000000000000008400000000000001040",
        ),
        (
            Geometry::MultiLineString(MultiLineString::new(vec![
                line(&[(1., 2.), (3., 4.)]),
                line(&[(5., 6.), (7., 8.)]),
            ])),
            "0105000020E610000002000000010200000002000000000000000000F03F000000000000004000000000000008400000000000001040010200000002000000000000000000144000000000000018400000000000001C400000000000002040",
        ),
        (
            Geometry::Polygon(polygon(1.)),
            "0103000020E61000000200000005000000000000000000F03F000000000000004000000000000008400000000000001040000000000000144000000000000018400000000000001C400000000000002040000000000000F03F00000000000000400500000000000000000022400000000000002440000000000000264000000000000028400000000000002A400000000000002C400000000000002E40000000000000304000000000000022400000000000002440",
        ),
        (
            Geometry::MultiPolygon(MultiPolygon::new(vec![polygon(1.), polygon(17.)])),
            "0106000020E61000000200000001030000000200000005000000000000000000F03F000000000000004000000000000008400000000000001040000000000000144000000000000018400000000000001C400000000000002040000000000000F03F00000000000000400500000000000000000022400000000000002440000000000000264000000000000028400000000000002A400000000000002C400000000000002E400000000000003040000000000000224000000000000024400103000000020000000500000000000000000031400000000000003240000000000000334000000000000034400000000000003540000000000000364000000000000037400000000000003840000000000000314000000000000032400500000000000000000039400000000000003A400000000000003B400000000000003C400000000000003D400000000000003E400000000000003F40000000000000404000000000000039400000000000003A40",
        ),
        (
            Geometry::GeometryCollection(GeometryCollection::new(vec![
                Geometry::Point(Point::new(1., 2.)),
                Geometry::LineString(line(&[(3., 4.), (5., 6.), (7., 8.)])),
            ])),
            "0107000020E6100000020000000101000000000000000000F03F000000000000004001020000000300000000000000000008400000000000001040000000000000144000000000000018400000000000001C400000000000002040",
        ),
    ]
}

fn triangle() -> Triangle {
    Triangle::from_vertices(Point::new(0., 0.), Point::new(1., 0.), Point::new(0., 1.))
}

/// One value of every geometry kind.
fn all_kinds() -> Vec<Geometry> {
    let mut geoms: Vec<Geometry> = ewkb_fixtures().into_iter().map(|(g, _)| g).collect();
    geoms.push(Geometry::LinearRing(ring(1.)));
    geoms.push(Geometry::Triangle(triangle()));
    geoms.push(Geometry::PolyhedralSurface(PolyhedralSurface::new(vec![
        polygon(1.),
        polygon(17.),
    ])));
    geoms.push(Geometry::Tin(Tin::new(vec![triangle(), triangle()])));
    geoms
}

/// A LinearRing outside a polygon comes back as a LineString.
fn expected_after_decode(geom: &Geometry) -> Geometry {
    match geom {
        Geometry::LinearRing(ring) => Geometry::LineString(ring.clone().into()),
        other => other.clone(),
    }
}

#[test]
fn ewkb_fixtures_are_byte_exact() {
    let transformer = WkbTransformer::ewkb(Some(4326));
    for (geom, expected) in ewkb_fixtures() {
        let hex = transformer.encode_hex(&geom).unwrap();
        assert_eq!(hex, expected.to_lowercase(), "{}", geom.geometry_type());

        let decoded = transformer.decode_hex_with_srid(expected).unwrap();
        assert_eq!(decoded.geometry, geom);
        assert_eq!(decoded.srid, Some(4326));
    }
}

#[test]
fn plain_wkb_drops_srid_flag() {
    for (geom, expected) in ewkb_fixtures() {
        let plain = geom.as_binary().unwrap();
        let ewkb = decode_hex(expected).unwrap();
        // Plain WKB is EWKB without the SRID field and with the flag cleared
        assert_eq!(plain.len() + 4, ewkb.len());
        assert_eq!(&plain[..4], &ewkb[..4]);
        assert_eq!(ewkb[4] & 0x20, 0x20);
        assert_eq!(&plain[5..], &ewkb[9..]);
    }
}

#[test]
fn every_kind_round_trips() {
    for endianness in [Endianness::LittleEndian, Endianness::BigEndian] {
        for dialect in [WkbDialect::Wkb, WkbDialect::Ewkb] {
            let transformer = WkbTransformer::new(
                WkbOptions::default()
                    .with_endianness(endianness)
                    .with_dialect(dialect),
            );
            for geom in all_kinds() {
                let buf = transformer.encode(&geom).unwrap();
                assert_eq!(buf[0], u8::from(endianness));
                assert_eq!(transformer.decode(&buf).unwrap(), expected_after_decode(&geom));
                // Decoding then encoding reproduces the bytes
                let again = transformer.encode(&transformer.decode(&buf).unwrap()).unwrap();
                assert_eq!(again, buf);
            }
        }
    }
}

#[test]
fn z_and_m_round_trip_in_ewkb() {
    let points = vec![
        Point::new_zm(1., 2., 3., 4.),
        Point::new_zm(5., 6., 7., 8.),
        Point::new_zm(9., 10., 11., 12.),
    ];
    let geoms = [
        Geometry::LineString(LineString::new(points.clone())),
        Geometry::MultiPoint(MultiPoint::new(points.clone())),
        Geometry::Polygon(Polygon::new(LinearRing::closed(points), vec![])),
    ];
    let transformer = WkbTransformer::ewkb(Some(3857));
    for geom in geoms {
        let buf = transformer.encode(&geom).unwrap();
        let flags = u32::from_le_bytes(buf[1..5].try_into().unwrap()) & 0xf000_0000;
        assert_eq!(flags, 0xe000_0000);

        let decoded = transformer.decode_with_srid(&buf).unwrap();
        assert_eq!(decoded.geometry, geom);
        assert_eq!(decoded.srid, Some(3857));

        assert!(matches!(
            geom.as_binary(),
            Err(GeokitError::UnsupportedDimension(_))
        ));
    }
}

#[test]
fn measured_point_in_ewkb() {
    let geom = Geometry::Point(Point::new_m(1., 2., 5.));
    let buf = WkbTransformer::ewkb(None).encode(&geom).unwrap();
    assert_eq!(&buf[1..5], &[0x01, 0x00, 0x00, 0x40]);
    assert_eq!(from_wkb(&buf).unwrap(), geom);
}

#[test]
fn mixed_byte_orders_in_one_collection() {
    let mut buf = vec![0x01];
    buf.extend_from_slice(&7u32.to_le_bytes());
    buf.extend_from_slice(&2u32.to_le_bytes());
    // Big endian point
    buf.push(0x00);
    buf.extend_from_slice(&1u32.to_be_bytes());
    buf.extend_from_slice(&1f64.to_be_bytes());
    buf.extend_from_slice(&2f64.to_be_bytes());
    // Little endian point
    buf.push(0x01);
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&3f64.to_le_bytes());
    buf.extend_from_slice(&4f64.to_le_bytes());

    let expected = Geometry::GeometryCollection(GeometryCollection::new(vec![
        Geometry::Point(Point::new(1., 2.)),
        Geometry::Point(Point::new(3., 4.)),
    ]));
    assert_eq!(from_wkb(&buf).unwrap(), expected);
}

#[test]
fn big_endian_point() {
    let transformer =
        WkbTransformer::new(WkbOptions::default().with_endianness(Endianness::BigEndian));
    let hex = transformer
        .encode_hex(&Geometry::Point(Point::new(1., 1.)))
        .unwrap();
    assert_eq!(hex, "00000000013ff00000000000003ff0000000000000");
}

#[test]
fn truncated_prefixes_fail() {
    for geom in all_kinds() {
        let buf = WkbTransformer::ewkb(Some(4326)).encode(&geom).unwrap();
        for len in 0..buf.len() {
            let err = from_wkb(&buf[..len]).unwrap_err();
            assert!(
                matches!(err, GeokitError::TruncatedGeometry(_)),
                "{} cut at {len}: {err}",
                geom.geometry_type()
            );
        }
    }
}

#[test]
fn unknown_type_codes() {
    for code in [0u32, 8, 14, 18, 1001, 0xffff] {
        let mut buf = vec![0x01];
        buf.extend_from_slice(&code.to_le_bytes());
        buf.extend_from_slice(&[0; 16]);
        assert_eq!(
            from_wkb(&buf).unwrap_err(),
            GeokitError::UnknownTypeCode(code)
        );
    }
}

#[test]
fn huge_declared_count_fails_fast() {
    let mut buf = vec![0x01];
    buf.extend_from_slice(&7u32.to_le_bytes());
    buf.extend_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(
        from_wkb(&buf),
        Err(GeokitError::TruncatedGeometry(_))
    ));
}

#[test]
fn nesting_limit() {
    let mut geom = Geometry::Point(Point::new(0., 0.));
    for _ in 0..5 {
        geom = Geometry::GeometryCollection(GeometryCollection::new(vec![geom]));
    }
    let buf = geom.as_binary().unwrap();

    let shallow = WkbTransformer::new(WkbOptions::default().with_max_depth(4));
    assert_eq!(
        shallow.decode(&buf).unwrap_err(),
        GeokitError::NestingTooDeep(4)
    );
    let deep_enough = WkbTransformer::new(WkbOptions::default().with_max_depth(5));
    assert_eq!(deep_enough.decode(&buf).unwrap(), geom);
}

#[test]
fn polygon_rings_decode_as_linear_rings() {
    let buf = Geometry::Polygon(polygon(1.)).as_binary().unwrap();
    let decoded = Polygon::try_from(from_wkb(&buf).unwrap()).unwrap();
    assert_eq!(decoded.exterior_ring(), &ring(1.));
    assert_eq!(decoded.interior_ring_n(0), Some(&ring(9.)));
}

#[test]
fn options_from_json() {
    let options: WkbOptions =
        serde_json::from_str(r#"{"dialect": "Ewkb", "srid": 4326}"#).unwrap();
    assert_eq!(options.endianness, Endianness::LittleEndian);
    assert_eq!(options.max_depth, WkbOptions::DEFAULT_MAX_DEPTH);

    let hex = WkbTransformer::new(options)
        .encode_hex(&Geometry::Point(Point::new(1., 1.)))
        .unwrap();
    assert_eq!(hex, "0101000020e6100000000000000000f03f000000000000f03f");
}
