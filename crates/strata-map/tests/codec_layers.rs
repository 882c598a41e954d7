//! Save/load of maps with layers and arbitrary metro words.

use proptest::prelude::*;
use strata_core::{TileIndex, TileType};
use strata_map::{layout, load, save, Cell, CodecError, MapConfig, MapError, TileMap};

fn layered_map(metro: &[(u32, u16)], layers: &[u32]) -> TileMap {
    let mut map = TileMap::new(MapConfig::new(6, 7).unwrap()).unwrap();
    for &(i, word) in metro {
        let t = TileIndex(i % map.len() as u32);
        map.cell_mut(t).set(layout::METRO_WORD, u32::from(word));
    }
    for &i in layers {
        let t = TileIndex(i % map.len() as u32);
        map.cell_mut(t).set_tile_type(TileType::Water);
        let _ = map.push_layer(t, Cell::new(TileType::Road));
    }
    map
}

/// A metro word that decodes: signaled words keep the single track in
/// range and no-signal words only reserve a track they have.
fn decodable_metro_word(mask: u16, rail_type: u16, signaled: bool, extra: u16) -> u16 {
    let mask = mask & 0x3F;
    let rail_type = (rail_type & 0x3F) << 6;
    if signaled {
        let mut w = 0x8000 | rail_type | (extra & 0x7027);
        if w & 0x4000 != 0 {
            w |= extra & 0x0008;
        } else {
            w |= (mask % 6) << 3;
        }
        w
    } else {
        let code = match mask.trailing_zeros() {
            tz if extra & 1 != 0 && tz < 6 => tz as u16 + 1,
            _ => 0,
        };
        mask | rail_type | (code << 12)
    }
}

fn metro_word() -> impl Strategy<Value = u16> {
    (any::<u16>(), any::<u16>(), any::<bool>(), any::<u16>())
        .prop_map(|(mask, rt, signaled, extra)| decodable_metro_word(mask, rt, signaled, extra))
}

fn rejected_metro_word(word: u16) -> bool {
    let map = layered_map(&[(3, word)], &[]);
    let mut buf = Vec::new();
    save(&map, &mut buf).unwrap();
    match load(&mut buf.as_slice()) {
        Err(CodecError::MalformedCell { index, .. }) => {
            assert_eq!(index, TileIndex(3));
            true
        }
        Ok(_) => false,
        Err(other) => panic!("unexpected error: {other:?}"),
    }
}

proptest! {
    #[test]
    fn save_load_is_identity(
        metro in proptest::collection::vec((any::<u32>(), metro_word()), 0..64),
        layers in proptest::collection::vec(any::<u32>(), 0..16),
    ) {
        let map = layered_map(&metro, &layers);
        let mut buf = Vec::new();
        save(&map, &mut buf).unwrap();
        let loaded = load(&mut buf.as_slice()).unwrap();
        prop_assert_eq!(&loaded, &map);

        let mut again = Vec::new();
        save(&loaded, &mut again).unwrap();
        prop_assert_eq!(again, buf);
    }
}

#[test]
fn non_square_dimensions_survive() {
    let map = layered_map(&[], &[]);
    let mut buf = Vec::new();
    save(&map, &mut buf).unwrap();
    let loaded = load(&mut buf.as_slice()).unwrap();
    assert_eq!((loaded.size_x(), loaded.size_y()), (64, 128));
}

#[test]
fn duplicate_layer_in_file_is_rejected() {
    let map = layered_map(&[], &[10]);
    let mut buf = Vec::new();
    save(&map, &mut buf).unwrap();

    // Bump the count of the single entry and append a second road cell.
    let n = buf.len();
    buf[n - Cell::SERIALIZED_LEN - 1] = 2;
    buf.extend_from_slice(&Cell::new(TileType::Road).to_le_bytes());

    match load(&mut buf.as_slice()) {
        Err(CodecError::Map(MapError::LayerConflict { index, tile_type })) => {
            assert_eq!(index, TileIndex(10));
            assert_eq!(tile_type, TileType::Road);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn layer_flag_follows_stack() {
    let mut map = layered_map(&[], &[20]);
    let t = TileIndex(20);
    assert!(map.cell(t).flag(layout::ASSOCIATED_TILE));
    map.remove_layer(t, TileType::Road).unwrap();
    assert!(!map.cell(t).flag(layout::ASSOCIATED_TILE));
    assert!(map.layers(t).is_empty());
}

#[test]
fn signaled_track_past_last_is_rejected() {
    // Single-track layout with track field 6 and 7.
    assert!(rejected_metro_word(0x8030));
    assert!(rejected_metro_word(0x8038));
    // Track 5 is the last one; the double layout ignores the field.
    assert!(!rejected_metro_word(0x8028));
    assert!(!rejected_metro_word(0xC008));
}

#[test]
fn reservation_outside_tracks_is_rejected() {
    // Code 3 reserves the upper track on a mask holding only X.
    assert!(rejected_metro_word(0x3001));
    assert!(!rejected_metro_word(0x3005));
    assert!(!rejected_metro_word(0x0001));
}

#[test]
fn pair_code_needs_a_whole_pair() {
    // Upper and left only: neither parallel pair is complete.
    assert!(rejected_metro_word(0x7014));
    assert!(!rejected_metro_word(0x700C));
    assert!(!rejected_metro_word(0x7030));
    assert!(!rejected_metro_word(0x703F));
}

#[test]
fn void_cells_skip_metro_check() {
    let mut map = layered_map(&[], &[]);
    let t = TileIndex(9);
    map.cell_mut(t).set_tile_type(TileType::Void);
    map.cell_mut(t).set(layout::METRO_WORD, 0x8030);
    let mut buf = Vec::new();
    save(&map, &mut buf).unwrap();
    assert_eq!(load(&mut buf.as_slice()).unwrap(), map);
}
