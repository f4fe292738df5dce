#![allow(dead_code)]

use ai_navmesh::{NavMesh, NavMeshLayout, Vec3};

pub const TOLERANCE: f32 = 0.0025;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[track_caller]
pub fn assert_close(label: &str, expected: Vec3, actual: Vec3, tolerance: f32) {
    let ok = (expected.x - actual.x).abs() <= tolerance
        && (expected.y - actual.y).abs() <= tolerance
        && (expected.z - actual.z).abs() <= tolerance;
    assert!(ok, "{label}: expected {expected:?}, got {actual:?}");
}

/// Append a flat, counter-clockwise (seen from +z) polygon lying in a horizontal plane.
///
/// Walls are vertical, so exit normals equal the in-plane edge normals and every vertex post
/// points straight up.
pub fn push_flat_face(layout: &mut NavMeshLayout, vertices: &[Vec3], neighbors: &[u32]) {
    assert_eq!(vertices.len(), neighbors.len());
    let offset = layout.vertex_positions.len();
    let up = Vec3::new(0.0, 0.0, 1.0);

    layout.face_vertex_offsets.push(offset);
    layout.face_vertex_counts.push(vertices.len());
    layout.face_normals.push(up);

    for (i, &start) in vertices.iter().enumerate() {
        let end = vertices[(i + 1) % vertices.len()];
        let along = end - start;
        let length_squared = along.length_squared();
        let length = length_squared.sqrt();
        let outward = Vec3::new(along.y / length, -along.x / length, 0.0);

        layout.vertex_positions.push(start);
        layout.edge_normals.push(outward);
        layout.edge_exit_normals.push(outward);
        layout.edge_coefficients.push(along * (1.0 / length_squared));
        layout.vertex_up_normals.push(up);
        layout.edge_neighbor_counts.push(neighbors[i]);
    }
}

pub fn unit_square(z: f32) -> [Vec3; 4] {
    [
        Vec3::new(0.0, 0.0, z),
        Vec3::new(1.0, 0.0, z),
        Vec3::new(1.0, 1.0, z),
        Vec3::new(0.0, 1.0, z),
    ]
}

/// Unit square at `z = 0`. Edges: 0 at `y = 0`, 1 at `x = 1`, 2 at `y = 1`, 3 at `x = 0`.
/// Edge 1 is shared with a neighbor; the others are walls.
pub fn square_layout() -> NavMeshLayout {
    let mut layout = NavMeshLayout::default();
    push_flat_face(&mut layout, &unit_square(0.0), &[0, 1, 0, 0]);
    layout
}

pub fn square_mesh() -> NavMesh {
    square_layout().validate().expect("square layout")
}

fn vecs(values: &[[f32; 3]]) -> Vec<Vec3> {
    values.iter().copied().map(Vec3::from).collect()
}

fn fixture_layout(face_normals: &[[f32; 3]]) -> NavMeshLayout {
    NavMeshLayout {
        face_vertex_counts: vec![3, 5, 4, 6],
        face_vertex_offsets: vec![0, 3, 8, 12],
        face_normals: vecs(face_normals),
        vertex_positions: vecs(&VERTEX_POSITIONS),
        edge_normals: vecs(&EDGE_NORMALS),
        edge_exit_normals: vecs(&EDGE_EXIT_NORMALS),
        edge_coefficients: vecs(&EDGE_COEFFICIENTS),
        vertex_up_normals: vec![Vec3::ZERO; VERTEX_POSITIONS.len()],
        edge_neighbor_counts: EDGE_NEIGHBOR_COUNTS.to_vec(),
    }
}

/// Four-face reference mesh as used by the sliding collision scenarios.
pub fn sliding_fixture() -> NavMesh {
    fixture_layout(&SLIDING_FACE_NORMALS)
        .validate()
        .expect("sliding fixture")
}

/// Same mesh with face 2 flipped, as used by the surface projection scenarios.
pub fn surface_fixture() -> NavMesh {
    fixture_layout(&SURFACE_FACE_NORMALS)
        .validate()
        .expect("surface fixture")
}

pub const VERTEX_POSITIONS: [[f32; 3]; 18] = [
    [-3.4020490646362305, 2.8101935386657715, -0.29557961225509644],
    [-4.021132946014404, 0.4352002739906311, 1.110173225402832],
    [-5.086987018585205, 1.94649076461792, 0.3486257791519165],
    [-1.8411436080932617, -2.8504514694213867, 0.7629717588424683],
    [-1.3159351348876953, -1.4987578392028809, 0.8193982839584351],
    [-0.7699069976806641, -1.1729934215545654, 1.3055280447006226],
    [-0.3965773284435272, -3.695011615753174, 2.724773406982422],
    [-1.7895712852478027, -3.858870029449463, 1.2203859090805054],
    [-0.4381864070892334, 0.2253333330154419, 2.216573715209961],
    [-1.7317837476730347, 0.9585509300231934, 1.4953770637512207],
    [-0.9570263028144836, 1.5087556838989258, 0.6936352252960205],
    [1.082206130027771, 0.8231964111328125, 1.2440972328186035],
    [3.376988410949707, 3.536540985107422, 1.8753199577331543],
    [4.3473639488220215, 2.9355649948120117, 1.3645833730697632],
    [2.634784698486328, 2.1809427738189697, 0.16277146339416504],
    [1.4529716968536377, 2.790022134780884, 0.6424660086631775],
    [1.3432226181030273, 3.4920597076416016, 1.4348706007003784],
    [2.3029632568359375, 3.920729398727417, 2.115065097808838],
];

pub const SLIDING_FACE_NORMALS: [[f32; 3]; 4] = [
    [0.07895775884389877, 0.49244746565818787, 0.8667532205581665],
    [-0.7232892513275146, 0.2542363703250885, 0.642041027545929],
    [0.09298569709062576, 0.7767484784126282, 0.6229087114334106],
    [-0.12398175895214081, -0.7511836290359497, 0.6483453512191772],
];

pub const SURFACE_FACE_NORMALS: [[f32; 3]; 4] = [
    [0.07895775884389877, 0.49244746565818787, 0.8667532205581665],
    [-0.7232892513275146, 0.2542363703250885, 0.642041027545929],
    [-0.09298569709062576, -0.7767484784126282, -0.6229087114334106],
    [-0.12398175895214081, -0.7511836290359497, 0.6483453512191772],
];

pub const EDGE_EXIT_NORMALS: [[f32; 3]; 18] = [
    [0.8445626497268677, -0.41813111305236816, -0.33448511362075806],
    [-0.7482595443725586, -0.6309695839881897, -0.20490238070487976],
    [-0.5380623936653137, 0.6443790197372437, -0.5433824062347412],
    [-0.3881560266017914, 0.18847911059856415, -0.9021145105361938],
    [0.2913234829902649, 0.6106106042861938, -0.7364001274108887],
    [0.8732513189315796, 0.33066919445991516, 0.35789668560028076],
    [0.28668972849845886, -0.9441192150115967, -0.16262786090373993],
    [-0.3236362040042877, -0.4045316278934479, -0.855344295501709],
    [-0.5978249311447144, -0.3412596583366394, 0.7253599762916565],
    [-0.7264787554740906, 0.6329079270362854, -0.2676868736743927],
    [0.2879942059516907, 0.09123139083385468, -0.9532766342163086],
    [0.4545976519584656, -0.8736056685447693, 0.17364968359470367],
    [0.6291472911834717, 0.6354882121086121, 0.44758081436157227],
    [0.5895053148269653, -0.7023043036460876, -0.39906418323516846],
    [-0.5148865580558777, -0.4032585620880127, -0.7564880847930908],
    [-0.9757379293441772, -0.21241706609725952, 0.053051725029945374],
    [-0.5568119883537292, 0.7758399844169617, 0.29670313000679016],
    [0.36428022384643555, 0.5488821864128113, 0.7523483633995056],
];

pub const EDGE_NORMALS: [[f32; 3]; 18] = [
    [0.9725521206855774, -0.22895699739456177, 0.04148668050765991],
    [-0.8424692153930664, -0.43185123801231384, 0.32210269570350647],
    [-0.5329273343086243, 0.7556453347206116, -0.38077372312545776],
    [-0.5881147980690002, 0.2604789733886719, -0.7656837701797485],
    [-0.10690337419509888, 0.8773258328437805, -0.46783649921417236],
    [0.6785890460014343, 0.43394654989242554, 0.5926274657249451],
    [-0.13480409979820251, -0.9638553857803345, 0.22980590164661407],
    [-0.6889761686325073, -0.3283272981643677, -0.6461523771286011],
    [-0.6153386831283569, -0.44700878858566284, 0.6492623090744019],
    [-0.7765533328056335, 0.44812941551208496, -0.4428826570510864],
    [0.3848402798175812, 0.5489599704742432, -0.7419843673706055],
    [0.593180775642395, -0.5456900596618652, 0.5919111967086792],
    [0.6184095144271851, 0.4524862766265869, 0.642515242099762],
    [0.6258806586265564, -0.5662204027175903, -0.5363466739654541],
    [-0.5343284010887146, -0.5000267624855042, -0.6815176010131836],
    [-0.986912190914154, 0.02545109950006008, -0.15923726558685303],
    [-0.6300894021987915, 0.5643534660339355, 0.5333784818649292],
    [0.3682067394256592, 0.5719105005264282, 0.7330362200737],
];

pub const EDGE_COEFFICIENTS: [[f32; 3]; 18] = [
    [-0.07738548517227173, -0.29687416553497314, 0.17571909725666046],
    [-0.26646363735198975, 0.3778228163719177, -0.19038695096969604],
    [0.4212346076965332, 0.21592575311660767, -0.16105137765407562],
    [0.24937447905540466, 0.6417982578277588, 0.026791905984282494],
    [0.8523813486099243, 0.5085370540618896, 0.7588765621185303],
    [0.04384785145521164, -0.29621291160583496, 0.16669143736362457],
    [-0.3292769193649292, -0.038732971996068954, -0.3556082248687744],
    [-0.041969820857048035, 0.8206561803817749, -0.3722459673881531],
    [-0.47364968061447144, 0.2684670388698578, -0.26406559348106384],
    [0.5012131929397583, 0.355943500995636, -0.5186702013015747],
    [0.4135141670703888, -0.1390172392129898, 0.11162230372428894],
    [-0.42060860991477966, -0.16539567708969116, 0.26903051137924194],
    [0.6205825805664062, -0.3843410909175873, -0.32663047313690186],
    [-0.34620407223701477, -0.1525495946407318, -0.24295058846473694],
    [-0.5915671586990356, 0.30488017201423645, 0.24011541903018951],
    [-0.09688244014978409, 0.6197329163551331, 0.6995055675506592],
    [0.6122652888298035, 0.2734692692756653, 0.4339292049407959],
    [0.790533185005188, -0.2827807664871216, -0.17646372318267822],
];

pub const EDGE_NEIGHBOR_COUNTS: [u32; 18] = [1, 0, 2, 3, 0, 0, 1, 2, 0, 0, 2, 1, 5, 4, 3, 1, 2, 3];
